use crate::error::{FacegenError, FacegenResult};

/// Output raster dimensions for every frame.
pub const FRAME_WIDTH: u32 = 400;
pub const FRAME_HEIGHT: u32 = 480;

/// A rendered frame as RGBA8 pixels.
///
/// Frames coming out of the rasterizer are **premultiplied alpha**; the
/// `premultiplied` flag makes this explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Rasterize an SVG document into a fixed-size frame.
///
/// The drawing is scaled to fill the target exactly, so the SVG's own
/// width/height only define its logical coordinate space.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> FacegenResult<FrameRGBA> {
    if width == 0 || height == 0 {
        return Err(FacegenError::generation(
            "raster target width/height must be non-zero",
        ));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| FacegenError::generation(format!("failed to parse face svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FacegenError::generation("failed to allocate raster pixmap"))?;

    let size = tree.size();
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#ff0000"/></svg>"##;

    #[test]
    fn fills_target_dimensions() {
        let frame = rasterize_svg(RED_SVG, 8, 6).unwrap();
        assert_eq!(frame.width, 8);
        assert_eq!(frame.height, 6);
        assert_eq!(frame.data.len(), 8 * 6 * 4);
        assert!(frame.premultiplied);
    }

    #[test]
    fn solid_fill_covers_every_pixel() {
        let frame = rasterize_svg(RED_SVG, 4, 4).unwrap();
        for px in frame.data.chunks_exact(4) {
            assert_eq!(px, [255, 0, 0, 255]);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let svg = crate::face::FaceSpec::from_seed("rocket").to_svg();
        let a = rasterize_svg(&svg, FRAME_WIDTH, FRAME_HEIGHT).unwrap();
        let b = rasterize_svg(&svg, FRAME_WIDTH, FRAME_HEIGHT).unwrap();
        assert_eq!(a.data, b.data);
        assert!(a.data.iter().any(|&x| x != 0));
    }

    #[test]
    fn malformed_svg_is_rejected() {
        assert!(rasterize_svg("<svg", 4, 4).is_err());
        assert!(rasterize_svg(RED_SVG, 0, 4).is_err());
    }
}
