use async_trait::async_trait;
use dia_core::{Error, Result};

use crate::extractor::TextExtractor;

/// Pre-extracted text passed as `text:<content>`.
pub struct LiteralTextExtractor;

#[async_trait]
impl TextExtractor for LiteralTextExtractor {
    async fn extract(&self, source: &str) -> Result<String> {
        if let Some(text) = source.strip_prefix("text:") {
            Ok(text.to_string())
        } else {
            Err(Error::InvalidSource("expected a text: source".to_string()))
        }
    }

    fn can_handle(&self, source: &str) -> bool {
        source.starts_with("text:")
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}
