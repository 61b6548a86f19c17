//! Image input validation

use dia_core::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Case-insensitive; `jpg` and `jpeg` are both JPEG
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
        }
    }
}

/// An existing screenshot file in a supported format.
#[derive(Debug, Clone)]
pub struct ImageInput {
    path: PathBuf,
    format: ImageFormat,
}

impl ImageInput {
    /// Accepts a bare path or a `file:` URI.
    pub fn from_source(source: &str) -> Result<Self> {
        let path = source.strip_prefix("file:").unwrap_or(source);
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageFormat::from_extension)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        if !path.is_file() {
            return Err(Error::ImageNotFound(path.display().to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(ImageFormat::from_extension("png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_extension("JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("gif"), None);
        assert_eq!(ImageFormat::from_extension(""), None);
    }

    #[test]
    fn test_unsupported_checked_before_existence() {
        let err = ImageInput::from_path("/nonexistent/dashboard.gif").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));

        let err = ImageInput::from_source("file:/nonexistent/dashboard.png").unwrap_err();
        assert!(matches!(err, Error::ImageNotFound(_)));
    }
}
