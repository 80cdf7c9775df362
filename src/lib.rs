//! IPv4 address-space analysis.
//!
//! Validates CIDR blocks, finds unused space between allocations and detects
//! overlapping allocations. The engine in [`processing`] is pure and
//! synchronous; [`api`] and the `cidr-viewer` binary are thin transports.

pub mod api;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use config::AnalyzerConfig;
use models::{AnalysisRequest, AnalysisResult, CidrRange};
use processing::{calculate_summary, collect_cidrs, find_gaps, find_overlaps, parse_cidr};

/// Run one complete analysis over the request.
///
/// Always returns a well-formed result; bad entries end up in
/// `invalid_cidrs`.
pub fn analyze(request: &AnalysisRequest, config: &AnalyzerConfig) -> AnalysisResult {
    let collected = collect_cidrs(request);

    let gaps = find_gaps(&collected.valid);
    let scan = find_overlaps(&collected.valid, config);
    let summary = calculate_summary(&collected.valid, &gaps, &scan.overlaps);

    log::debug!(
        "analysis: {} valid, {} invalid, {} gap(s), {} overlap(s)",
        collected.valid.len(),
        collected.invalid.len(),
        summary.gap_count,
        summary.overlap_count
    );

    AnalysisResult {
        valid_cidrs: collected.valid,
        invalid_cidrs: collected.invalid,
        gaps,
        overlaps: scan.overlaps,
        summary,
        overlaps_truncated: scan.truncated,
    }
}

/// Validate a single CIDR string.
pub fn validate_cidr(cidr: &str) -> CidrRange {
    parse_cidr(cidr)
}
