use anyhow::Result;
use dia_config::{Config, OutputFormat};
use dia_core::{ReportOptions, render_report};
use dia_engine::Pipeline;
use dia_ocr::{ExtractorRegistry, TesseractOptions};

pub async fn handle(
    config: &Config,
    source: String,
    json: bool,
    show_masked: bool,
    lang: Option<String>,
) -> Result<()> {
    let options = TesseractOptions {
        binary: config.ocr.tesseract_path.clone(),
        language: lang.unwrap_or_else(|| config.ocr.language.clone()),
    };
    let pipeline = Pipeline::new(ExtractorRegistry::with_tesseract(options));

    let summary = pipeline.summarize(&source).await?;

    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let options = ReportOptions {
            show_masked_text: show_masked || config.output.show_masked_text,
        };
        print!("{}", render_report(&summary, &options));
    }

    Ok(())
}
