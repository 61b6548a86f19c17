use async_trait::async_trait;
use dia_core::{Error, Result};
use std::path::PathBuf;
use tokio::process::Command;

use crate::extractor::TextExtractor;
use crate::image::ImageInput;

#[derive(Debug, Clone)]
pub struct TesseractOptions {
    /// Explicit binary; looked up on PATH when unset
    pub binary: Option<PathBuf>,
    /// Tesseract language code
    pub language: String,
}

impl Default for TesseractOptions {
    fn default() -> Self {
        Self {
            binary: None,
            language: "eng".to_string(),
        }
    }
}

/// OCR through the `tesseract` command line tool.
///
/// Output goes to stdout only; no intermediate files are written.
pub struct TesseractExtractor {
    options: TesseractOptions,
}

impl TesseractExtractor {
    pub fn new(options: TesseractOptions) -> Self {
        Self { options }
    }

    fn locate_binary(&self) -> Result<PathBuf> {
        match &self.options.binary {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => Err(Error::ToolMissing(path.display().to_string())),
            None => which::which("tesseract")
                .map_err(|e| Error::ToolMissing(format!("tesseract: {}", e))),
        }
    }
}

#[async_trait]
impl TextExtractor for TesseractExtractor {
    async fn extract(&self, source: &str) -> Result<String> {
        let image = ImageInput::from_source(source)?;
        let binary = self.locate_binary()?;

        tracing::debug!(
            format = image.format().as_str(),
            language = %self.options.language,
            "Running tesseract"
        );

        let output = Command::new(&binary)
            .arg(image.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.options.language)
            .output()
            .await
            .map_err(|e| {
                Error::ExtractionFailed(format!("Failed to run {}: {}", binary.display(), e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ExtractionFailed(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn can_handle(&self, source: &str) -> bool {
        !source.is_empty() && !source.starts_with("text:")
    }

    fn kind(&self) -> &'static str {
        "tesseract"
    }
}
