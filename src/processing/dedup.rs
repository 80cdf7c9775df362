//! Request input collection and legacy de-duplication.
//!
//! Entries of the legacy `cidrs` list are skipped when the same text already
//! appears in `vpc_cidrs` or `subnet_cidrs`. Matching is by exact string, so
//! `10.0.0.1/24` and `10.0.0.0/24` stay distinct.

use super::parse_cidr;
use crate::models::{AnalysisRequest, Category, CidrRange};
use std::collections::HashSet;

/// Parsed request entries split into valid and invalid, in processing order:
/// VPC list, subnet list, then the remaining legacy entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectedCidrs {
    pub valid: Vec<CidrRange>,
    pub invalid: Vec<CidrRange>,
}

impl CollectedCidrs {
    fn push(&mut self, cidr: CidrRange) {
        if cidr.valid {
            self.valid.push(cidr);
        } else {
            self.invalid.push(cidr);
        }
    }
}

/// Parse and categorize every entry of the request.
pub fn collect_cidrs(request: &AnalysisRequest) -> CollectedCidrs {
    let mut collected = CollectedCidrs::default();

    let typed = request
        .vpc_cidrs
        .iter()
        .map(|c| (c, Some(Category::Vpc)))
        .chain(request.subnet_cidrs.iter().map(|c| (c, Some(Category::Subnet))));
    for (cidr, category) in typed {
        collected.push(parse_cidr(cidr).with_category(category));
    }

    let already_processed: HashSet<&str> = request
        .vpc_cidrs
        .iter()
        .chain(request.subnet_cidrs.iter())
        .map(String::as_str)
        .collect();

    let mut skipped = 0;
    for cidr in &request.cidrs {
        if already_processed.contains(cidr.as_str()) {
            skipped += 1;
            continue;
        }
        collected.push(parse_cidr(cidr));
    }

    log::debug!(
        "collected {} valid, {} invalid, {} legacy duplicate(s) skipped",
        collected.valid.len(),
        collected.invalid.len(),
        skipped
    );
    collected
}
