//! Sensitive-pattern masking for OCR text
//!
//! Matches are replaced with fixed placeholder tokens such as `[MASKED_ID]`.
//! Masking is best-effort: it covers the built-in rule set and nothing else.

pub mod rules;

use regex::NoExpand;
use serde::{Deserialize, Serialize};

pub use rules::{DetectionRule, builtin_rules};

/// How many spans a single rule replaced during one masking call.
///
/// Carries counts only, never the matched content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub rule: String,
    pub placeholder: String,
    pub count: usize,
}

/// Stateless masking engine over the built-in rule table.
#[derive(Debug, Clone, Copy)]
pub struct Masker {
    rules: &'static [DetectionRule],
}

impl Masker {
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    pub fn rules(&self) -> &[DetectionRule] {
        self.rules
    }

    /// Mask every span recognized by the rule table.
    pub fn mask(&self, text: &str) -> String {
        self.mask_with_report(text).0
    }

    /// Mask `text` and report per-rule replacement counts.
    ///
    /// Rules run in table order, each over the output of the previous one.
    /// A replacement can expose a word boundary that was not there before
    /// (`$1.00` glued to a digit run), so the ordered pass repeats until the
    /// text stops changing. Every replacement removes at least one digit and
    /// placeholders contain none, which bounds the number of passes.
    pub fn mask_with_report(&self, text: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = text.to_string();
        let mut counts = vec![0usize; self.rules.len()];

        loop {
            let mut changed = false;

            for (rule, total) in self.rules.iter().zip(counts.iter_mut()) {
                let count = rule.regex.find_iter(&result).count();
                if count == 0 {
                    continue;
                }

                result = rule
                    .regex
                    .replace_all(&result, NoExpand(rule.placeholder))
                    .into_owned();
                *total += count;
                changed = true;
            }

            if !changed {
                break;
            }
        }

        let redactions = self
            .rules
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(rule, count)| RedactionInfo {
                rule: rule.name.to_string(),
                placeholder: rule.placeholder.to_string(),
                count,
            })
            .collect();

        (result, redactions)
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

/// Mask `text` with the built-in rules.
pub fn mask(text: &str) -> String {
    Masker::new().mask(text)
}
