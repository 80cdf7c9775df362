//! Analysis result types: gaps, overlaps and the summary.

use super::CidrRange;
use serde::{Deserialize, Serialize};

/// Unused address space strictly between two merged allocations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub start_ip: String,
    pub end_ip: String,
    /// `end - start + 1`.
    pub size: u64,
    /// One power-of-two aligned block covering the gap start. It may extend
    /// past `end_ip` when `size` is not a power of two.
    pub suggested_cidr: String,
}

/// How two overlapping CIDR entries relate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverlapKind {
    /// One block properly contains the other.
    Partial,
    /// Both denote the same address range.
    Complete,
}

impl std::fmt::Display for OverlapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OverlapKind::Partial => write!(f, "partial"),
            OverlapKind::Complete => write!(f, "complete"),
        }
    }
}

/// Two original (unmerged) input entries whose ranges intersect.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    /// Earlier entry in input order.
    pub cidr1: String,
    /// Later entry in input order.
    pub cidr2: String,
    /// Original text of the contained entry (`cidr1` when identical).
    pub intersection: String,
    #[serde(rename = "type")]
    pub kind: OverlapKind,
}

/// Totals over one analysis.
///
/// `allocated_ips` double counts space covered by several overlapping entries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_ips: u64,
    pub allocated_ips: u64,
    pub available_ips: u64,
    pub gap_count: usize,
    pub overlap_count: usize,
}

/// Complete output of one analysis run.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub valid_cidrs: Vec<CidrRange>,
    pub invalid_cidrs: Vec<CidrRange>,
    pub gaps: Vec<Gap>,
    pub overlaps: Vec<Overlap>,
    pub summary: Summary,
    /// Set when the overlap comparison budget ran out before all pairs were
    /// checked.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overlaps_truncated: bool,
}
