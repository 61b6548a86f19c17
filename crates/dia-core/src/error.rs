use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Unsupported image format: {0} (expected png, jpg or jpeg)")]
    UnsupportedFormat(String),

    #[error("OCR tool not available: {0}")]
    ToolMissing(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),
}

impl Error {
    /// Failures inside the OCR collaborator after a valid image was supplied.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Error::ToolMissing(_) | Error::ExtractionFailed(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_failure_classification() {
        assert!(Error::ToolMissing("tesseract".into()).is_extraction_failure());
        assert!(Error::ExtractionFailed("exit 1".into()).is_extraction_failure());
        assert!(!Error::ImageNotFound("a.png".into()).is_extraction_failure());
        assert!(!Error::UnsupportedFormat("a.gif".into()).is_extraction_failure());
    }

    #[test]
    fn test_every_variant_classified() {
        // No wildcard arm: every variant is either bad input or an OCR failure
        let all = [
            Error::InvalidSource(String::new()),
            Error::ImageNotFound(String::new()),
            Error::UnsupportedFormat(String::new()),
            Error::ToolMissing(String::new()),
            Error::ExtractionFailed(String::new()),
        ];

        for err in &all {
            let expected = match err {
                Error::InvalidSource(_) | Error::ImageNotFound(_) | Error::UnsupportedFormat(_) => {
                    false
                }
                Error::ToolMissing(_) | Error::ExtractionFailed(_) => true,
            };
            assert_eq!(err.is_extraction_failure(), expected, "{}", err);
        }
    }
}
