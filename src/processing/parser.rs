//! CIDR validation and addressing facts.

use crate::models::{num_addresses, num_usable_hosts, CidrRange, Ipv4};
use std::net::Ipv4Addr;

/// Parse one CIDR string into a [`CidrRange`].
///
/// Never fails: malformed input yields an entry with `valid == false` and an
/// `error_msg`.
pub fn parse_cidr(cidr: &str) -> CidrRange {
    let ipv4 = match Ipv4::new(cidr) {
        Ok(ipv4) => ipv4,
        Err(e) => {
            log::debug!("rejecting '{cidr}': {e}");
            return CidrRange::invalid(cidr, format!("Invalid CIDR format: {e}"));
        }
    };

    // A /0 mask has no network bits and is not reported as an allocation.
    if ipv4.mask == 0 {
        log::debug!("rejecting '{cidr}': degenerate /0 mask");
        return CidrRange::invalid(cidr, "Invalid subnet mask");
    }

    let (total_ips, usable_ips) = match (num_addresses(ipv4.mask), num_usable_hosts(ipv4.mask)) {
        (Ok(total), Ok(usable)) => (total, usable),
        (Err(e), _) | (_, Err(e)) => {
            return CidrRange::invalid(cidr, format!("Invalid subnet mask: {e}"));
        }
    };

    CidrRange {
        original: cidr.to_string(),
        network: ipv4.lo().to_string(),
        mask: Ipv4Addr::from(ipv4.netmask()).to_string(),
        broadcast: ipv4.hi().to_string(),
        total_ips,
        usable_ips,
        valid: true,
        category: None,
        error_msg: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr_24() {
        let cidr = parse_cidr("10.0.0.0/24");
        assert!(cidr.valid);
        assert_eq!(cidr.original, "10.0.0.0/24");
        assert_eq!(cidr.network, "10.0.0.0");
        assert_eq!(cidr.mask, "255.255.255.0");
        assert_eq!(cidr.broadcast, "10.0.0.255");
        assert_eq!(cidr.total_ips, 256);
        assert_eq!(cidr.usable_ips, 254);
        assert!(cidr.error_msg.is_none());
        assert!(cidr.category.is_none());
    }

    #[test]
    fn test_parse_cidr_host_bits_set() {
        let cidr = parse_cidr("192.168.10.77/20");
        assert!(cidr.valid);
        assert_eq!(cidr.original, "192.168.10.77/20", "original kept verbatim");
        assert_eq!(cidr.network, "192.168.0.0");
        assert_eq!(cidr.mask, "255.255.240.0");
        assert_eq!(cidr.broadcast, "192.168.15.255");
        assert_eq!(cidr.total_ips, 4096);
    }

    #[test]
    fn test_parse_cidr_small_blocks() {
        let c31 = parse_cidr("10.0.0.0/31");
        assert_eq!((c31.total_ips, c31.usable_ips), (2, 0));
        let c32 = parse_cidr("10.0.0.7/32");
        assert_eq!((c32.total_ips, c32.usable_ips), (1, 0));
        assert_eq!(c32.network, c32.broadcast);
        let c30 = parse_cidr("10.0.0.4/30");
        assert_eq!((c30.total_ips, c30.usable_ips), (4, 2));
    }

    #[test]
    fn test_parse_cidr_all_prefixes() {
        for n in 1..=32u8 {
            let cidr = parse_cidr(&format!("10.20.30.40/{n}"));
            assert!(cidr.valid, "/{n} should be valid");
            let total = 1u64 << (32 - n);
            assert_eq!(cidr.total_ips, total, "/{n}");
            let usable = if n <= 30 { total - 2 } else { 0 };
            assert_eq!(cidr.usable_ips, usable, "/{n}");
        }
    }

    #[test]
    fn test_parse_cidr_zero_prefix_is_degenerate() {
        let cidr = parse_cidr("0.0.0.0/0");
        assert!(!cidr.valid);
        assert_eq!(cidr.error_msg.as_deref(), Some("Invalid subnet mask"));
        assert!(cidr.network.is_empty());
        assert_eq!(cidr.total_ips, 0);
    }

    #[test]
    fn test_parse_cidr_invalid() {
        for input in [
            "999.0.0.0/24",
            "10.0.0.0/33",
            "10.0.0.0",
            "10.0.0/24",
            "",
            "abc",
            "10.0.0.0/-1",
            "fd00::/8",
        ] {
            let cidr = parse_cidr(input);
            assert!(!cidr.valid, "'{input}' should be invalid");
            assert_eq!(cidr.original, input);
            assert!(cidr.network.is_empty() && cidr.mask.is_empty() && cidr.broadcast.is_empty());
            assert_eq!((cidr.total_ips, cidr.usable_ips), (0, 0));
            let msg = cidr.error_msg.unwrap_or_default();
            assert!(msg.starts_with("Invalid CIDR format: "), "got '{msg}'");
        }
    }
}
