//! Gap finding between allocated blocks.
//!
//! Identifies unused address ranges between merged allocations and suggests a
//! CIDR block for each.

use super::merge::{address_ranges, merge_ranges, AddressRange};
use crate::models::{get_cidr_mask, int_to_address, CidrRange, Gap, MAX_LENGTH};
use itertools::Itertools;

/// Find the gaps between the valid entries.
///
/// Space before the first and after the last allocation is never reported.
pub fn find_gaps(valid_cidrs: &[CidrRange]) -> Vec<Gap> {
    let merged = merge_ranges(address_ranges(valid_cidrs));
    gaps_between(&merged)
}

/// Emit one [`Gap`] for every hole between consecutive merged ranges.
///
/// `merged` must be sorted, disjoint and non-adjacent, as returned by
/// [`merge_ranges`].
pub fn gaps_between(merged: &[AddressRange]) -> Vec<Gap> {
    merged
        .iter()
        .tuple_windows()
        .filter_map(|(lower, upper)| {
            // Non-adjacent ranges guarantee lower.end < u32::MAX and upper.start > 0.
            let gap_start = lower.end.checked_add(1)?;
            let gap_end = upper.start.checked_sub(1)?;
            (gap_start <= gap_end).then(|| Gap {
                start_ip: int_to_address(gap_start).to_string(),
                end_ip: int_to_address(gap_end).to_string(),
                size: u64::from(gap_end - gap_start) + 1,
                suggested_cidr: suggest_cidr(gap_start, gap_end),
            })
        })
        .collect()
}

/// Suggest one CIDR block for the gap `[start, end]`.
///
/// Picks the smallest power-of-two block not smaller than the gap and aligns
/// `start` down to it. When the gap size is not a power of two the block
/// overhangs the gap; this is a single suggestion, not an exact partition.
///
/// # Examples
/// ```
/// use cidr_viewer::processing::suggest_cidr;
/// // 10.0.1.0 - 10.0.1.255
/// assert_eq!(suggest_cidr(0x0A000100, 0x0A0001FF), "10.0.1.0/24");
/// ```
pub fn suggest_cidr(start: u32, end: u32) -> String {
    let size = u64::from(end.saturating_sub(start)) + 1;
    let block_bits = (0..=MAX_LENGTH)
        .find(|bits| (1u64 << bits) >= size)
        .unwrap_or(MAX_LENGTH);
    let prefix = MAX_LENGTH - block_bits;
    let aligned_start = start & get_cidr_mask(prefix).unwrap_or(0);
    format!("{}/{}", int_to_address(aligned_start), prefix)
}
