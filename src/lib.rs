//! Facegen serves deterministic animated face images over HTTP.
//!
//! Each seed string maps through a stable hash into one of 14,400 face
//! parameter combinations, is drawn as an SVG, rasterized at 400x480, and
//! the per-seed frames are assembled into a single looping GIF:
//!
//! - Normalize the request's comma-separated seeds
//! - Synthesize a [`FaceSpec`] per seed and rasterize it
//! - Encode the ordered frames with [`encode_gif()`]
#![forbid(unsafe_code)]

pub mod capability;
pub mod encode_gif;
pub mod error;
pub mod face;
pub mod pipeline;
pub mod raster;
pub mod seeds;
pub mod server;

pub use capability::Capabilities;
pub use encode_gif::{GIF_MIME, encode_gif};
pub use error::{FacegenError, FacegenResult};
pub use face::{FaceSpec, PARAM_COMBINATIONS, seed_index};
pub use pipeline::{EncodedAnimation, generate_animation};
pub use raster::{FRAME_HEIGHT, FRAME_WIDTH, FrameRGBA, rasterize_svg};
pub use seeds::normalize_seeds;
