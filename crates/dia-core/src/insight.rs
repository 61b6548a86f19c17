//! Insight sections derived from masked text
//!
//! Narratives are fixed templates. They never quote figures from the input,
//! so nothing traceable to the extracted text can surface in a summary.

use serde::Serialize;
use serde::ser::SerializeMap;
use std::fmt;

/// Fixed set of section labels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightLabel {
    Overview,
    KeyChanges,
    PossibleDrivers,
    MonitoringRecommendations,
}

impl InsightLabel {
    pub const ALL: [InsightLabel; 4] = [
        InsightLabel::Overview,
        InsightLabel::KeyChanges,
        InsightLabel::PossibleDrivers,
        InsightLabel::MonitoringRecommendations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightLabel::Overview => "Overview",
            InsightLabel::KeyChanges => "Key Changes",
            InsightLabel::PossibleDrivers => "Possible Drivers",
            InsightLabel::MonitoringRecommendations => "Monitoring Recommendations",
        }
    }

    /// Heading shown by the report renderer
    pub fn heading(&self) -> &'static str {
        match self {
            InsightLabel::Overview => "Executive Summary",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for InsightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightSection {
    pub label: InsightLabel,
    pub narrative: String,
}

/// Ordered label → narrative mapping.
///
/// Serializes as a JSON object whose keys keep section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    sections: Vec<InsightSection>,
}

impl Insights {
    pub fn get(&self, label: InsightLabel) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.narrative.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &InsightSection> {
        self.sections.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Serialize for Insights {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(section.label.as_str(), &section.narrative)?;
        }
        map.end()
    }
}

/// Turns masked text into insight sections.
///
/// Callers must pass masked text only; implementations can't tell the
/// difference.
pub trait InsightGenerator: Send + Sync {
    fn generate(&self, masked_text: &str) -> Insights;
}

/// Static, input-independent narratives.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateInsightGenerator;

impl TemplateInsightGenerator {
    fn narrative(label: InsightLabel) -> &'static str {
        match label {
            InsightLabel::Overview => {
                "This dashboard provides a consolidated view of operational performance across multiple teams."
            }
            InsightLabel::KeyChanges => {
                "Several metrics show variation compared to previous periods, indicating potential shifts in workload or performance."
            }
            InsightLabel::PossibleDrivers => {
                "Observed changes may be driven by operational volume fluctuations, resource allocation, or process bottlenecks."
            }
            InsightLabel::MonitoringRecommendations => {
                "It is recommended to continue monitoring key KPIs, particularly those approaching predefined thresholds."
            }
        }
    }
}

impl InsightGenerator for TemplateInsightGenerator {
    fn generate(&self, _masked_text: &str) -> Insights {
        let sections = InsightLabel::ALL
            .iter()
            .map(|&label| InsightSection {
                label,
                narrative: Self::narrative(label).to_string(),
            })
            .collect();

        Insights { sections }
    }
}

/// Generate insights with the template generator.
pub fn generate(masked_text: &str) -> Insights {
    TemplateInsightGenerator.generate(masked_text)
}
