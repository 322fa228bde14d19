pub type FacegenResult<T> = Result<T, FacegenError>;

/// Tagged error kinds for the whole pipeline.
///
/// The remediation texts for the two capability errors are part of the public
/// API surface; clients match on them byte for byte.
#[derive(thiserror::Error, Debug)]
pub enum FacegenError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("GIF generation requires cairosvg. Install: pip install cairosvg")]
    RenderingUnavailable,

    #[error("GIF generation requires Pillow. Install: pip install pillow")]
    EncodingUnavailable,

    #[error(transparent)]
    Generation(#[from] anyhow::Error),
}

impl FacegenError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(anyhow::Error::msg(msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts_are_stable() {
        assert_eq!(
            FacegenError::invalid_input("Error: 'seeds' parameter required (comma-separated list)")
                .to_string(),
            "Error: 'seeds' parameter required (comma-separated list)"
        );
        assert_eq!(
            FacegenError::RenderingUnavailable.to_string(),
            "GIF generation requires cairosvg. Install: pip install cairosvg"
        );
        assert_eq!(
            FacegenError::EncodingUnavailable.to_string(),
            "GIF generation requires Pillow. Install: pip install pillow"
        );
    }

    #[test]
    fn generation_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = FacegenError::Generation(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
