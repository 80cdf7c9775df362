//! Summary totals.

use crate::models::{CidrRange, Gap, Overlap, Summary};

/// Aggregate the analysis outputs.
///
/// `allocated_ips` is the plain sum over valid entries, so space claimed by
/// overlapping entries is counted once per entry.
pub fn calculate_summary(valid_cidrs: &[CidrRange], gaps: &[Gap], overlaps: &[Overlap]) -> Summary {
    let allocated_ips: u64 = valid_cidrs.iter().map(|c| c.total_ips).sum();
    let available_ips: u64 = gaps.iter().map(|g| g.size).sum();

    Summary {
        total_ips: allocated_ips + available_ips,
        allocated_ips,
        available_ips,
        gap_count: gaps.len(),
        overlap_count: overlaps.len(),
    }
}
