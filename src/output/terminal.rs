//! Terminal output utilities.
//!
//! Provides formatting helpers and the colored analysis report.

use crate::models::{AnalysisResult, CidrRange, OverlapKind};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One line describing a parsed entry.
pub fn cidr_line(cidr: &CidrRange) -> String {
    let category = cidr
        .category
        .map(|c| format!(" [{c}]"))
        .unwrap_or_default();
    if cidr.valid {
        format!(
            "{original:<20} {network:>15} - {broadcast:<15} mask {mask:<15} {total:>10} ips {usable:>10} usable{category}",
            original = cidr.original,
            network = cidr.network,
            broadcast = cidr.broadcast,
            mask = cidr.mask,
            total = cidr.total_ips,
            usable = cidr.usable_ips,
        )
    } else {
        format!(
            "{original:<20} {error}{category}",
            original = cidr.original,
            error = cidr.error_msg.as_deref().unwrap_or("invalid"),
        )
    }
}

/// Render the analysis as report lines.
pub fn report_lines(result: &AnalysisResult) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("{} ({})", "Valid CIDRs".bold(), result.valid_cidrs.len()));
    for cidr in &result.valid_cidrs {
        lines.push(format!("  {}", cidr_line(cidr).green()));
    }

    if !result.invalid_cidrs.is_empty() {
        lines.push(format!(
            "{} ({})",
            "Invalid CIDRs".bold(),
            result.invalid_cidrs.len()
        ));
        for cidr in &result.invalid_cidrs {
            lines.push(format!("  {}", cidr_line(cidr).red()));
        }
    }

    lines.push(format!("{} ({})", "Gaps".bold(), result.gaps.len()));
    for gap in &result.gaps {
        lines.push(format!(
            "  {start:>15} - {end:<15} {size:>10} ips  suggest {suggested}",
            start = gap.start_ip,
            end = gap.end_ip,
            size = gap.size,
            suggested = gap.suggested_cidr.cyan(),
        ));
    }

    lines.push(format!("{} ({})", "Overlaps".bold(), result.overlaps.len()));
    for overlap in &result.overlaps {
        let kind = match overlap.kind {
            OverlapKind::Complete => overlap.kind.to_string().on_red(),
            OverlapKind::Partial => overlap.kind.to_string().yellow(),
        };
        lines.push(format!(
            "  {cidr1} <> {cidr2}  {kind}  contained: {intersection}",
            cidr1 = overlap.cidr1,
            cidr2 = overlap.cidr2,
            intersection = overlap.intersection,
        ));
    }
    if result.overlaps_truncated {
        lines.push(format!(
            "  {} overlap scan hit its comparison limit, list is partial",
            "NOTE".on_red()
        ));
    }

    let s = &result.summary;
    lines.push(format!("{}", "Summary".bold()));
    lines.push(format!(
        "  total {} = allocated {} + available {}; {} gap(s), {} overlap(s)",
        s.total_ips, s.allocated_ips, s.available_ips, s.gap_count, s.overlap_count
    ));

    lines
}

/// Print the analysis report to stdout.
pub fn print_report(result: &AnalysisResult) {
    for line in report_lines(result) {
        println!("{line}");
    }
}
