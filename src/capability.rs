use crate::encode_gif::encode_gif;
use crate::error::{FacegenError, FacegenResult};
use crate::raster::{FrameRGBA, rasterize_svg};

/// Runtime availability of the two optional rendering backends.
///
/// Capability presence does not change while the process runs, so the flags
/// are probed once at startup and handed to the orchestration layer. Both
/// checks run before any per-seed work.
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    pub raster: bool,
    pub encode: bool,
}

impl Capabilities {
    /// Probe both backends end to end on trivial inputs.
    pub fn probe() -> Self {
        Self {
            raster: probe_raster(),
            encode: probe_encode(),
        }
    }

    /// All capabilities present. Intended for tests.
    pub fn all() -> Self {
        Self {
            raster: true,
            encode: true,
        }
    }

    pub fn ensure_raster(&self) -> FacegenResult<()> {
        if self.raster {
            Ok(())
        } else {
            Err(FacegenError::RenderingUnavailable)
        }
    }

    pub fn ensure_encode(&self) -> FacegenResult<()> {
        if self.encode {
            Ok(())
        } else {
            Err(FacegenError::EncodingUnavailable)
        }
    }
}

fn probe_raster() -> bool {
    const PROBE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1" fill="#000000"/></svg>"##;
    rasterize_svg(PROBE_SVG, 1, 1).is_ok()
}

fn probe_encode() -> bool {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    };
    encode_gif(&[frame], 10).is_ok()
}
