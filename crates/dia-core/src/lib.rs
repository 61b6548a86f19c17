//! Core domain models and logic for dia
//!
//! This crate contains:
//! - Insight sections and the template generator
//! - The per-request `Summary`
//! - Plain-text report rendering

pub mod error;
pub mod insight;
pub mod render;
pub mod summary;

pub use error::{Error, Result};
pub use insight::{
    InsightGenerator, InsightLabel, InsightSection, Insights, TemplateInsightGenerator, generate,
};
pub use render::{ReportOptions, render_report};
pub use summary::Summary;
