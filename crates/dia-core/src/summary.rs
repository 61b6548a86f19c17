//! Per-request result handed to the presentation layer

use dia_security::RedactionInfo;
use serde::Serialize;

use crate::insight::Insights;

/// Masked text for audit display plus the derived insight sections.
///
/// Owned by a single request and dropped with it.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub masked_text: String,
    pub insights: Insights,
    pub redactions: Vec<RedactionInfo>,
}

impl Summary {
    /// Total number of spans replaced across all rules
    pub fn redaction_count(&self) -> usize {
        self.redactions.iter().map(|r| r.count).sum()
    }
}
