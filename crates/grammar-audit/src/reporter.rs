//! Coverage Report Generation
//!
//! Generates reports in two formats:
//! - Human-readable for terminal output
//! - JSON for library consumers

use crate::auditor::{CoverageReport, GRAMMAR_FILE_NAME};

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate the human-readable report.
    ///
    /// Fixed section order: totals, done count with percentage, partial
    /// count, gap count, the known-gaps section when any gap exists, then
    /// either the missing-rules error section or the confirmation line.
    pub fn to_human_readable(report: &CoverageReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total constructs checked: {}\n", report.total));
        output.push_str(&format!(
            "Done:    {:3}  ({:.0}%)\n",
            report.done_count,
            report.done_percentage()
        ));
        output.push_str(&format!("Partial: {:3}\n", report.partial_count));
        output.push_str(&format!("Gap:     {:3}\n", report.gap_count));

        if !report.gaps.is_empty() {
            output.push_str("\nKnown gaps:\n");
            for gap in &report.gaps {
                if gap.notes.is_empty() {
                    output.push_str(&format!("  - {}\n", gap.name));
                } else {
                    output.push_str(&format!("  - {}: {}\n", gap.name, gap.notes));
                }
            }
        }

        if report.missing_rules.is_empty() {
            output.push_str(&format!(
                "\nAll 'done' rules validated against {GRAMMAR_FILE_NAME}.\n"
            ));
        } else {
            output.push_str("\nERROR: 'done' constructs reference missing grammar rules:\n");
            for miss in &report.missing_rules {
                output.push_str(&format!("  - {miss}\n"));
            }
        }

        output
    }

    /// Generate JSON report
    pub fn to_json(report: &CoverageReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
