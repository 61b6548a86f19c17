//! Built-in detection rules
//!
//! The table is built once and never mutated. Order is part of the contract:
//! a rule earlier in the table sees the text before any later rule rewrites it,
//! so the longest digit pattern comes first.

use lazy_static::lazy_static;
use regex::Regex;

/// A compiled pattern paired with the placeholder that replaces its matches.
#[derive(Debug)]
pub struct DetectionRule {
    /// Stable rule name, used in redaction reports
    pub name: &'static str,
    pub placeholder: &'static str,
    pub regex: Regex,
}

impl DetectionRule {
    fn new(name: &'static str, pattern: &str, placeholder: &'static str) -> Self {
        Self {
            name,
            placeholder,
            // Patterns are literals below; failing here is a programming error.
            regex: Regex::new(pattern).expect("built-in detection pattern must compile"),
        }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

pub const ACCOUNT_PLACEHOLDER: &str = "[MASKED_ACCOUNT]";
pub const ID_PLACEHOLDER: &str = "[MASKED_ID]";
pub const AMOUNT_PLACEHOLDER: &str = "[MASKED_AMOUNT]";

lazy_static! {
    static ref RULES: Vec<DetectionRule> = vec![
        // 12-16 digit runs (card and account numbers)
        DetectionRule::new("account", r"\b\d{12,16}\b", ACCOUNT_PLACEHOLDER),
        // Employee / customer codes like AB123456
        DetectionRule::new("id", r"\b[A-Z]{1,2}\d{6,8}\b", ID_PLACEHOLDER),
        // Anchored on the currency symbol, not on word boundaries
        DetectionRule::new(
            "amount",
            r"\$\s?\d+(?:,\d{3})*(?:\.\d{2})?",
            AMOUNT_PLACEHOLDER,
        ),
    ];
}

/// The built-in rules in application order.
pub fn builtin_rules() -> &'static [DetectionRule] {
    &RULES
}
