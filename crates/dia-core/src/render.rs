//! Plain-text report rendering
//!
//! Output is deterministic for a given summary and options.

use crate::summary::Summary;

pub const TITLE: &str = "Dashboard Insight Assistant";
pub const BANNER: &str = "Generated locally · No data is stored · For internal use only";
pub const STATUS: &str = "Summary generated (no data stored)";
pub const AUDIT_HEADING: &str = "Masked extracted text (audit)";
pub const FOOTER: &str = "This tool runs entirely on-device. No inputs or outputs are stored unless explicitly saved by the user.";

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Append the masked text under the audit heading
    pub show_masked_text: bool,
}

pub fn render_report(summary: &Summary, options: &ReportOptions) -> String {
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\n\n");
    out.push_str(STATUS);
    out.push('\n');

    for section in summary.insights.iter() {
        out.push('\n');
        push_heading(&mut out, section.label.heading());
        out.push_str(&section.narrative);
        out.push('\n');
    }

    if options.show_masked_text {
        out.push('\n');
        push_heading(&mut out, AUDIT_HEADING);
        if summary.masked_text.trim().is_empty() {
            out.push_str("(no text extracted)\n");
        } else {
            out.push_str(summary.masked_text.trim_end());
            out.push('\n');
        }
    }

    out.push_str("\n---\n");
    out.push_str(FOOTER);
    out.push('\n');

    out
}

fn push_heading(out: &mut String, heading: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::generate;

    fn summary(masked_text: &str) -> Summary {
        Summary {
            masked_text: masked_text.to_string(),
            insights: generate(masked_text),
            redactions: Vec::new(),
        }
    }

    #[test]
    fn test_report_sections_in_order() {
        let report = render_report(&summary(""), &ReportOptions::default());

        let headings = [
            "Executive Summary",
            "Key Changes",
            "Possible Drivers",
            "Monitoring Recommendations",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| report.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(report.starts_with(TITLE));
        assert!(report.contains(STATUS));
        assert!(report.trim_end().ends_with(FOOTER));
    }

    #[test]
    fn test_audit_section_optional() {
        let s = summary("Employee [MASKED_ID]\n");

        let hidden = render_report(&s, &ReportOptions::default());
        assert!(!hidden.contains(AUDIT_HEADING));
        assert!(!hidden.contains("[MASKED_ID]"));

        let shown = render_report(
            &s,
            &ReportOptions {
                show_masked_text: true,
            },
        );
        assert!(shown.contains(AUDIT_HEADING));
        assert!(shown.contains("Employee [MASKED_ID]\n"));
    }

    #[test]
    fn test_audit_section_empty_text() {
        let report = render_report(
            &summary("  \n"),
            &ReportOptions {
                show_masked_text: true,
            },
        );

        assert!(report.contains("(no text extracted)"));
    }
}
