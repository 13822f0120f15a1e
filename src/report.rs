use std::fmt::Write;

use crate::stats::DomainReport;
use crate::utils::format_number;

/// Renders `report` for the terminal: every domain in order, then the `top` most common.
pub fn render_report(report: &DomainReport, top: Option<usize>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--- Emails by Domain ---");
    for entry in &report.domains {
        let _ = writeln!(out, "{}: {}", entry.domain, format_number(entry.count));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Unique domains: {}",
        format_number(report.domains.len() as u64)
    );
    let _ = writeln!(out, "Emails counted: {}", format_number(report.total_emails()));
    if report.stats.skipped_invalid > 0 {
        let _ = writeln!(
            out,
            "Invalid emails skipped: {}",
            format_number(report.stats.skipped_invalid as u64)
        );
    }
    if report.stats.skipped_duplicates > 0 {
        let _ = writeln!(
            out,
            "Duplicate emails skipped: {}",
            format_number(report.stats.skipped_duplicates as u64)
        );
    }

    if let Some(top_count) = top {
        let top_domains = report.top(top_count);
        let _ = writeln!(out, "\nTop {} domains:", top_domains.len());
        for entry in top_domains {
            let _ = writeln!(out, "- {}: {} emails", entry.domain, format_number(entry.count));
        }
    }

    out
}

pub fn render_json(report: &DomainReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
