//! Text extractor trait and registry

use async_trait::async_trait;
use dia_core::{Error, Result};

use crate::tesseract::{TesseractExtractor, TesseractOptions};
use crate::text::LiteralTextExtractor;

/// Turns a source (image path or literal text) into raw text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract raw text. The result may be empty.
    async fn extract(&self, source: &str) -> Result<String>;

    /// Check if this extractor can handle the given source
    fn can_handle(&self, source: &str) -> bool;

    /// Short name for log events
    fn kind(&self) -> &'static str;
}

/// Dispatches a source to the first registered extractor that accepts it.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::with_tesseract(TesseractOptions::default())
    }

    pub fn with_tesseract(options: TesseractOptions) -> Self {
        Self {
            extractors: vec![
                Box::new(LiteralTextExtractor),
                Box::new(TesseractExtractor::new(options)),
            ],
        }
    }

    /// Registry with no extractors
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    pub fn register(&mut self, extractor: Box<dyn TextExtractor>) {
        self.extractors.push(extractor);
    }

    pub fn resolve(&self, source: &str) -> Result<&dyn TextExtractor> {
        self.extractors
            .iter()
            .find(|e| e.can_handle(source))
            .map(|e| &**e)
            .ok_or_else(|| Error::InvalidSource(describe_unhandled(source)))
    }

    pub async fn extract(&self, source: &str) -> Result<String> {
        self.resolve(source)?.extract(source).await
    }
}

/// Error text for a source nothing accepts. Never echoes the source itself,
/// which may carry raw text.
fn describe_unhandled(source: &str) -> String {
    if source.is_empty() {
        return "empty source".to_string();
    }
    match source.split_once(':') {
        Some((scheme, _))
            if !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!("no extractor for '{}:' source ({} bytes)", scheme, source.len())
        }
        _ => format!("no extractor for source ({} bytes)", source.len()),
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhandled_source_not_echoed() {
        let registry = ExtractorRegistry::empty();

        let err = registry
            .resolve("text:Account 1234567890123 owner AB123456")
            .err()
            .unwrap();
        let message = err.to_string();

        assert!(matches!(err, Error::InvalidSource(_)));
        assert!(message.contains("'text:'"));
        assert!(!message.contains("1234567890123"));
        assert!(!message.contains("AB123456"));
    }

    #[test]
    fn test_unhandled_source_without_scheme() {
        let registry = ExtractorRegistry::empty();

        let err = registry.resolve("Employee AB123456").err().unwrap();
        assert!(!err.to_string().contains("AB123456"));

        let err = registry.resolve("").err().unwrap();
        assert!(err.to_string().contains("empty source"));
    }
}
