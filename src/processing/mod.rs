//! Address-space analysis engine.
//!
//! This module contains the pure analysis stages:
//! - [`parser`] - CIDR validation and addressing facts
//! - [`dedup`] - Request input collection and legacy de-duplication
//! - [`merge`] - Interval merging of allocated ranges
//! - [`gap_finder`] - Finding gaps between allocations
//! - [`overlap`] - Bounded pairwise overlap detection
//! - [`summary`] - Totals

mod dedup;
mod gap_finder;
mod merge;
mod overlap;
mod parser;
mod summary;

// Re-export public functions
pub use dedup::{collect_cidrs, CollectedCidrs};
pub use gap_finder::{find_gaps, gaps_between, suggest_cidr};
pub use merge::{address_ranges, merge_ranges, AddressRange};
pub use overlap::{find_overlaps, OverlapScan};
pub use parser::parse_cidr;
pub use summary::calculate_summary;
