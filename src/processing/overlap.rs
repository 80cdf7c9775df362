//! Overlapping CIDR detection.
//!
//! Compares the original (unmerged) valid entries pairwise and reports which
//! of them overlap. Canonical CIDR blocks are either disjoint or nested, so an
//! overlap exists exactly when one block contains the other's base address.

use crate::config::AnalyzerConfig;
use crate::models::{CidrRange, Ipv4, Overlap, OverlapKind};

/// Overlaps found by [`find_overlaps`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverlapScan {
    pub overlaps: Vec<Overlap>,
    /// Pairwise comparisons performed.
    pub comparisons: usize,
    /// True when the comparison budget stopped the scan early.
    pub truncated: bool,
}

/// Compare all pairs `(i, j)`, `i < j`, in lexicographic order.
///
/// At most `config.max_overlap_comparisons` pairs are evaluated; the rest are
/// silently skipped and `truncated` is set.
pub fn find_overlaps(valid_cidrs: &[CidrRange], config: &AnalyzerConfig) -> OverlapScan {
    let max_comparisons = config.max_overlap_comparisons;
    let mut scan = OverlapScan::default();

    let blocks: Vec<(&CidrRange, Option<Ipv4>)> =
        valid_cidrs.iter().map(|c| (c, c.block())).collect();

    'outer: for (i, (cidr1, block1)) in blocks.iter().enumerate() {
        for (cidr2, block2) in blocks.iter().skip(i + 1) {
            if scan.comparisons >= max_comparisons {
                scan.truncated = true;
                break 'outer;
            }
            scan.comparisons += 1;

            if let (Some(block1), Some(block2)) = (block1, block2) {
                if let Some(overlap) = check_overlap(cidr1, *block1, cidr2, *block2) {
                    scan.overlaps.push(overlap);
                }
            }
        }
    }

    if scan.truncated {
        log::warn!(
            "overlap scan stopped after {} comparisons ({} entries), result is partial",
            scan.comparisons,
            valid_cidrs.len()
        );
    }
    log::debug!(
        "found {} overlap(s) in {} comparisons",
        scan.overlaps.len(),
        scan.comparisons
    );
    scan
}

/// Classify one pair, `None` when the blocks are disjoint.
///
/// Blocks sharing a base address but differing in size contain each other's
/// base, yet only identical ranges are `Complete`.
fn check_overlap(
    cidr1: &CidrRange,
    block1: Ipv4,
    cidr2: &CidrRange,
    block2: Ipv4,
) -> Option<Overlap> {
    if !block1.contains(block2.lo()) && !block2.contains(block1.lo()) {
        return None;
    }

    let (kind, intersection) = if block1.lo() == block2.lo() && block1.hi() == block2.hi() {
        (OverlapKind::Complete, &cidr1.original)
    } else if block1.size() > block2.size() {
        (OverlapKind::Partial, &cidr2.original)
    } else {
        (OverlapKind::Partial, &cidr1.original)
    };

    Some(Overlap {
        cidr1: cidr1.original.clone(),
        cidr2: cidr2.original.clone(),
        intersection: intersection.clone(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;

    fn parsed(cidrs: &[&str]) -> Vec<CidrRange> {
        cidrs.iter().map(|c| parse_cidr(c)).collect()
    }

    fn scan(cidrs: &[&str]) -> OverlapScan {
        find_overlaps(&parsed(cidrs), &AnalyzerConfig::default())
    }

    #[test]
    fn test_partial_overlap_reports_contained_block() {
        let result = scan(&["10.0.0.0/16", "10.0.1.0/24"]);
        assert_eq!(
            result.overlaps,
            vec![Overlap {
                cidr1: "10.0.0.0/16".to_string(),
                cidr2: "10.0.1.0/24".to_string(),
                intersection: "10.0.1.0/24".to_string(),
                kind: OverlapKind::Partial,
            }]
        );
        assert!(!result.truncated);
        assert_eq!(result.comparisons, 1);
    }

    #[test]
    fn test_partial_overlap_smaller_first() {
        let result = scan(&["10.0.1.0/24", "10.0.0.0/16"]);
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].cidr1, "10.0.1.0/24");
        assert_eq!(result.overlaps[0].intersection, "10.0.1.0/24");
        assert_eq!(result.overlaps[0].kind, OverlapKind::Partial);
    }

    #[test]
    fn test_complete_overlap() {
        let result = scan(&["10.0.0.0/24", "10.0.0.0/24"]);
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].kind, OverlapKind::Complete);
        assert_eq!(result.overlaps[0].intersection, "10.0.0.0/24");
    }

    #[test]
    fn test_complete_overlap_textually_different() {
        let result = scan(&["10.0.0.1/24", "10.0.0.0/24"]);
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].kind, OverlapKind::Complete);
        assert_eq!(result.overlaps[0].intersection, "10.0.0.1/24");
    }

    #[test]
    fn test_same_base_different_size_is_partial() {
        let result = scan(&["10.0.0.0/25", "10.0.0.0/24"]);
        assert_eq!(result.overlaps.len(), 1);
        assert_eq!(result.overlaps[0].kind, OverlapKind::Partial);
        assert_eq!(result.overlaps[0].intersection, "10.0.0.0/25");

        let result = scan(&["10.0.0.0/24", "10.0.0.0/25"]);
        assert_eq!(result.overlaps[0].intersection, "10.0.0.0/25");
    }

    #[test]
    fn test_disjoint_and_adjacent_do_not_overlap() {
        assert!(scan(&["10.0.0.0/24", "10.0.1.0/24", "192.168.0.0/16"])
            .overlaps
            .is_empty());
    }

    #[test]
    fn test_overlap_ordering_follows_input_pairs() {
        let result = scan(&["10.0.0.0/8", "10.1.0.0/16", "10.1.2.0/24", "172.16.0.0/12"]);
        let pairs: Vec<(&str, &str)> = result
            .overlaps
            .iter()
            .map(|o| (o.cidr1.as_str(), o.cidr2.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("10.0.0.0/8", "10.1.0.0/16"),
                ("10.0.0.0/8", "10.1.2.0/24"),
                ("10.1.0.0/16", "10.1.2.0/24"),
            ]
        );
        assert_eq!(result.comparisons, 6);
    }

    #[test]
    fn test_comparison_budget_truncates_deterministically() {
        let cidrs = parsed(&["10.0.0.0/24", "10.0.0.0/24", "10.0.0.0/24", "10.0.0.0/24"]);
        let config = AnalyzerConfig {
            max_overlap_comparisons: 4,
        };
        let first = find_overlaps(&cidrs, &config);
        // Pairs (0,1) (0,2) (0,3) (1,2) are evaluated, (1,3) (2,3) are not.
        assert_eq!(first.comparisons, 4);
        assert_eq!(first.overlaps.len(), 4);
        assert!(first.truncated);
        assert_eq!(first, find_overlaps(&cidrs, &config));
    }

    #[test]
    fn test_budget_exactly_enough_is_not_truncated() {
        let cidrs = parsed(&["10.0.0.0/24", "10.0.0.0/25", "10.0.0.0/26"]);
        let config = AnalyzerConfig {
            max_overlap_comparisons: 3,
        };
        let result = find_overlaps(&cidrs, &config);
        assert_eq!(result.comparisons, 3);
        assert_eq!(result.overlaps.len(), 3);
        assert!(!result.truncated);
    }

    #[test]
    fn test_zero_budget() {
        let cidrs = parsed(&["10.0.0.0/24", "10.0.0.0/24"]);
        let config = AnalyzerConfig {
            max_overlap_comparisons: 0,
        };
        let result = find_overlaps(&cidrs, &config);
        assert!(result.overlaps.is_empty());
        assert!(result.truncated);
        assert!(!find_overlaps(&cidrs[..1], &config).truncated);
    }
}
