use dia_core::{InsightGenerator, Result, Summary, TemplateInsightGenerator};
use dia_ocr::ExtractorRegistry;
use dia_security::Masker;
use tracing::Instrument;

/// Extract → mask → generate, one request at a time.
///
/// Holds no per-request state. Raw and masked text live only inside a call
/// and are never logged; log events carry lengths and counts.
pub struct Pipeline {
    extractors: ExtractorRegistry,
    masker: Masker,
    generator: Box<dyn InsightGenerator>,
}

impl Pipeline {
    pub fn new(extractors: ExtractorRegistry) -> Self {
        Self {
            extractors,
            masker: Masker::new(),
            generator: Box::new(TemplateInsightGenerator),
        }
    }

    pub fn with_generator(mut self, generator: Box<dyn InsightGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Run the full pipeline for an image path or `text:` source.
    ///
    /// Bad input (unknown source, missing file, unsupported format) is an
    /// error. A failing OCR run degrades to empty text and still produces
    /// a summary.
    pub async fn summarize(&self, source: &str) -> Result<Summary> {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("summarize", %request_id);

        async move {
            let raw_text = self.extract_or_empty(source).await?;
            Ok(self.summarize_text(&raw_text))
        }
        .instrument(span)
        .await
    }

    /// Mask already-extracted text and derive insights from the masked copy.
    pub fn summarize_text(&self, raw_text: &str) -> Summary {
        let (masked_text, redactions) = self.masker.mask_with_report(raw_text);

        for info in &redactions {
            tracing::debug!(rule = %info.rule, count = info.count, "Masked spans");
        }

        let insights = self.generator.generate(&masked_text);

        let summary = Summary {
            masked_text,
            insights,
            redactions,
        };

        tracing::info!(
            masked_bytes = summary.masked_text.len(),
            redactions = summary.redaction_count(),
            sections = summary.insights.len(),
            "Summary generated"
        );

        summary
    }

    async fn extract_or_empty(&self, source: &str) -> Result<String> {
        let extractor = self.extractors.resolve(source)?;

        match extractor.extract(source).await {
            Ok(text) => {
                tracing::info!(
                    extractor = extractor.kind(),
                    bytes = text.len(),
                    "Extracted text"
                );
                Ok(text)
            }
            Err(e) if e.is_extraction_failure() => {
                tracing::warn!(
                    extractor = extractor.kind(),
                    error = %e,
                    "Text extraction failed, continuing with empty text"
                );
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(ExtractorRegistry::new())
    }
}
