//! IPv4 address and CIDR notation utilities.
//!
//! Provides the address codec (dotted-quad <-> `u32`) and the [`Ipv4`] struct
//! for representing an IPv4 address with a prefix length, along with the bit
//! arithmetic used by the analysis engine.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // Address part is checked by `Ipv4Addr`, only the shape is matched here.
    static ref CIDR_RE: Regex = Regex::new(r"^([^/]*)/([^/]*)$").expect("Invalid Regex?");
    static ref PREFIX_RE: Regex = Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex?");
}

/// Convert a dotted-quad IPv4 string to its big-endian `u32` value.
///
/// # Examples
/// ```
/// use cidr_viewer::models::address_to_int;
/// assert_eq!(address_to_int("10.0.1.0").unwrap(), 0x0A000100);
/// assert!(address_to_int("10.0.1").is_err());
/// ```
pub fn address_to_int(ip: &str) -> Result<u32, Box<dyn Error>> {
    let addr: Ipv4Addr = ip
        .parse()
        .map_err(|_| format!("invalid IPv4 address: {ip}"))?;
    Ok(u32::from(addr))
}

/// Convert a `u32` back to an IPv4 address. Total over all values.
pub fn int_to_address(bits: u32) -> Ipv4Addr {
    Ipv4Addr::from(bits)
}

/// Netmask bits for a prefix length, saturating at /32.
fn prefix_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_viewer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(prefix_bits(len))
    }
}

/// Number of addresses in a block of the given prefix length (`2^(32-len)`).
pub fn num_addresses(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses: network and broadcast are reserved.
///
/// /31 and /32 blocks report zero usable hosts.
pub fn num_usable_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    let total = num_addresses(len)?;
    if total <= 2 {
        Ok(0)
    } else {
        Ok(total - 2)
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address, host bits may be set.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The input is not trimmed. Octets must be plain decimal without
    /// leading zeros and the prefix must be 0..=32.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let caps = CIDR_RE
            .captures(addr_cidr)
            .ok_or_else(|| format!("expected address/prefix, got '{addr_cidr}'"))?;
        let (addr_part, mask_part) = (&caps[1], &caps[2]);

        let addr: Ipv4Addr = match addr_part.parse() {
            Ok(addr) => addr,
            Err(_) if addr_part.parse::<Ipv6Addr>().is_ok() => {
                return Err(format!("IPv6 is not supported: {addr_part}").into());
            }
            Err(_) => return Err(format!("invalid address '{addr_part}'").into()),
        };

        if !PREFIX_RE.is_match(mask_part) {
            return Err(format!("invalid prefix length '{mask_part}'").into());
        }
        let mask: u8 = mask_part
            .parse()
            .map_err(|_| format!("invalid prefix length '{mask_part}'"))?;
        if mask > MAX_LENGTH {
            return Err(format!("prefix length /{mask} is out of range 0..=32").into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The netmask as u32.
    pub fn netmask(&self) -> u32 {
        prefix_bits(self.mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.netmask())
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !self.netmask())
    }

    /// True when `ip` falls inside this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// Number of addresses covered by this block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }
}

impl FromStr for Ipv4 {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
