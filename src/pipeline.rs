use tracing::debug;

use crate::capability::Capabilities;
use crate::encode_gif::{GIF_MIME, encode_gif};
use crate::error::FacegenResult;
use crate::face::FaceSpec;
use crate::raster::{FRAME_HEIGHT, FRAME_WIDTH, rasterize_svg};

/// A fully encoded looping animation plus its MIME type.
#[derive(Clone, Debug)]
pub struct EncodedAnimation {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

/// Synthesize and rasterize one frame per seed, in order, then assemble the
/// looping GIF.
///
/// Capability checks run first so an unavailable backend never produces
/// partial computation. Seed order is frame order.
pub fn generate_animation(
    caps: &Capabilities,
    seeds: &[String],
    duration_ms: u32,
) -> FacegenResult<EncodedAnimation> {
    caps.ensure_raster()?;
    caps.ensure_encode()?;

    let mut frames = Vec::with_capacity(seeds.len());
    for seed in seeds {
        let spec = FaceSpec::from_seed(seed);
        let frame = rasterize_svg(&spec.to_svg(), FRAME_WIDTH, FRAME_HEIGHT)?;
        debug!(seed = %seed, frame = frames.len(), "rasterized face frame");
        frames.push(frame);
    }

    let bytes = encode_gif(&frames, duration_ms)?;
    debug!(
        frames = frames.len(),
        bytes = bytes.len(),
        duration_ms,
        "encoded animation"
    );
    Ok(EncodedAnimation {
        bytes,
        mime: GIF_MIME,
    })
}
