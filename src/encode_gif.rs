use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::error::{FacegenError, FacegenResult};
use crate::raster::FrameRGBA;

pub const GIF_MIME: &str = "image/gif";

/// Palette learning speed for the encoder (1 = best quality, 30 = fastest).
const QUANTIZER_SPEED: i32 = 10;

/// Background used when flattening translucent pixels; GIF stores no partial
/// alpha.
const FLATTEN_BG: [u8; 3] = [255, 255, 255];

/// Encode ordered frames into a single looping GIF byte stream.
///
/// Every frame is shown for `duration_ms` and the animation repeats forever
/// (NETSCAPE loop count 0). Frames must share one dimension, which the
/// rasterizer guarantees upstream.
pub fn encode_gif(frames: &[FrameRGBA], duration_ms: u32) -> FacegenResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(FacegenError::generation(
            "cannot encode an animation with no frames",
        ));
    }
    if duration_ms == 0 {
        return Err(FacegenError::generation("frame duration must be non-zero"));
    }

    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut out, QUANTIZER_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| FacegenError::generation(format!("failed to set gif loop: {e}")))?;

        for frame in frames {
            let rgba = flatten_to_opaque(frame)?;
            let image = RgbaImage::from_raw(frame.width, frame.height, rgba).ok_or_else(|| {
                FacegenError::generation("frame byte length does not match its dimensions")
            })?;
            let delay = Delay::from_numer_denom_ms(duration_ms, 1);
            encoder
                .encode_frame(Frame::from_parts(image, 0, 0, delay))
                .map_err(|e| FacegenError::generation(format!("failed to encode gif frame: {e}")))?;
        }
    }
    Ok(out)
}

/// Composite a frame over the flatten background, returning straight RGBA8
/// with full alpha everywhere.
fn flatten_to_opaque(frame: &FrameRGBA) -> FacegenResult<Vec<u8>> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(FacegenError::generation(
            "frame.data size mismatch with width*height*4",
        ));
    }

    let bg_r = u16::from(FLATTEN_BG[0]);
    let bg_g = u16::from(FLATTEN_BG[1]);
    let bg_b = u16::from(FLATTEN_BG[2]);

    let mut out = vec![0u8; frame.data.len()];
    for (d, s) in out.chunks_exact_mut(4).zip(frame.data.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        let (r, g, b) = if frame.premultiplied {
            (
                u16::from(s[0]) + mul_div255(bg_r, inv),
                u16::from(s[1]) + mul_div255(bg_g, inv),
                u16::from(s[2]) + mul_div255(bg_b, inv),
            )
        } else {
            (
                mul_div255(u16::from(s[0]), a) + mul_div255(bg_r, inv),
                mul_div255(u16::from(s[1]), a) + mul_div255(bg_g, inv),
                mul_div255(u16::from(s[2]), a) + mul_div255(bg_b, inv),
            )
        };

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(out)
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}
