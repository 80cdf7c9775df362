//! Interval merging of allocated address ranges.

use crate::models::{address_to_int, CidrRange};

/// Inclusive `[start, end]` range of 32-bit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AddressRange {
    pub start: u32,
    pub end: u32,
}

impl AddressRange {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "start[{start}] > end[{end}]");
        AddressRange { start, end }
    }

    /// True when `other` overlaps this range or starts right after it.
    ///
    /// Computed in u64 so an end of 255.255.255.255 does not wrap.
    fn touches(&self, other: &AddressRange) -> bool {
        u64::from(other.start) <= u64::from(self.end) + 1
    }
}

/// Address ranges of the valid entries, in input order.
///
/// Each range runs from the entry's network address to its broadcast address.
pub fn address_ranges(cidrs: &[CidrRange]) -> Vec<AddressRange> {
    cidrs
        .iter()
        .filter(|c| c.valid)
        .filter_map(|c| {
            let start = address_to_int(&c.network).ok()?;
            let end = address_to_int(&c.broadcast).ok()?;
            Some(AddressRange::new(start, end))
        })
        .collect()
}

/// Sort ranges by `(start, end)` and merge overlapping or adjacent ones.
///
/// The result is ascending, disjoint and non-adjacent.
pub fn merge_ranges(mut ranges: Vec<AddressRange>) -> Vec<AddressRange> {
    ranges.sort();

    let mut merged: Vec<AddressRange> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(acc) if acc.touches(&r) => acc.end = acc.end.max(r.end),
            _ => merged.push(r),
        }
    }
    log::debug!("merged into {} range(s)", merged.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::parse_cidr;

    fn ranges(cidrs: &[&str]) -> Vec<AddressRange> {
        let parsed: Vec<CidrRange> = cidrs.iter().map(|c| parse_cidr(c)).collect();
        address_ranges(&parsed)
    }

    #[test]
    fn test_address_ranges_skip_invalid() {
        let r = ranges(&["10.0.0.0/24", "bogus", "10.0.2.9/31"]);
        assert_eq!(
            r,
            vec![
                AddressRange::new(0x0A000000, 0x0A0000FF),
                AddressRange::new(0x0A000208, 0x0A000209),
            ]
        );
    }

    #[test]
    fn test_merge_adjacent() {
        let merged = merge_ranges(ranges(&["10.0.1.0/24", "10.0.0.0/24"]));
        assert_eq!(merged, vec![AddressRange::new(0x0A000000, 0x0A0001FF)]);
    }

    #[test]
    fn test_merge_nested_and_disjoint() {
        let merged = merge_ranges(ranges(&[
            "10.0.5.0/24",
            "10.0.0.0/16",
            "10.0.0.0/24",
            "192.168.0.0/24",
        ]));
        assert_eq!(
            merged,
            vec![
                AddressRange::new(0x0A000000, 0x0A00FFFF),
                AddressRange::new(0xC0A80000, 0xC0A800FF),
            ]
        );
    }

    #[test]
    fn test_merge_keeps_one_address_gap() {
        let merged = merge_ranges(vec![AddressRange::new(0, 9), AddressRange::new(11, 20)]);
        assert_eq!(merged.len(), 2, "address 10 is uncovered");
    }

    #[test]
    fn test_merge_top_of_address_space() {
        let merged = merge_ranges(ranges(&[
            "255.255.255.255/32",
            "255.255.255.0/24",
            "255.255.255.128/25",
        ]));
        assert_eq!(merged, vec![AddressRange::new(0xFFFFFF00, u32::MAX)]);

        let merged = merge_ranges(ranges(&["255.255.255.255/32", "0.0.0.0/32"]));
        assert_eq!(merged.len(), 2, "end+1 must not wrap to zero");
    }

    #[test]
    fn test_merge_result_is_disjoint_and_non_adjacent() {
        let merged = merge_ranges(ranges(&[
            "10.0.0.0/26",
            "10.0.0.64/26",
            "10.0.3.0/24",
            "10.0.0.128/25",
            "10.0.2.0/25",
            "10.0.8.0/21",
        ]));
        for pair in merged.windows(2) {
            assert!(
                u64::from(pair[0].end) + 1 < u64::from(pair[1].start),
                "{:?} and {:?} should have been merged",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_ranges(Vec::new()).is_empty());
    }
}
