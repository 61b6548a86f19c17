//! OCR collaborator: screenshot in, raw text out
//!
//! Sources are either image paths (`dashboard.png`, `file:dashboard.png`)
//! handled by Tesseract, or literal pre-extracted text (`text:...`).

pub mod extractor;
pub mod image;
pub mod tesseract;
pub mod text;

pub use extractor::{ExtractorRegistry, TextExtractor};
pub use image::{ImageFormat, ImageInput};
pub use tesseract::{TesseractExtractor, TesseractOptions};
pub use text::LiteralTextExtractor;
