//! Parsed (or attempted) CIDR entry.

use super::Ipv4;
use serde::{Deserialize, Serialize};

/// Caller-supplied classification of a CIDR entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vpc,
    Subnet,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Vpc => write!(f, "vpc"),
            Category::Subnet => write!(f, "subnet"),
        }
    }
}

/// One input CIDR string together with the addressing facts derived from it.
///
/// When `valid` is false every derived field is empty/zero and `error_msg`
/// holds the reason.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CidrRange {
    /// Input text, verbatim.
    pub original: String,
    /// Network address (dotted quad).
    pub network: String,
    /// Netmask (dotted quad).
    pub mask: String,
    /// Broadcast address (dotted quad).
    pub broadcast: String,
    /// Number of addresses in the block.
    pub total_ips: u64,
    /// Number of host addresses, excluding network and broadcast.
    pub usable_ips: u64,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl CidrRange {
    /// Invalid entry carrying only the original text and a reason.
    pub fn invalid(original: &str, error_msg: impl Into<String>) -> Self {
        CidrRange {
            original: original.to_string(),
            error_msg: Some(error_msg.into()),
            ..Default::default()
        }
    }

    /// Same entry tagged with a category.
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// The block this entry denotes, re-derived from `original`.
    ///
    /// `None` for invalid entries.
    pub fn block(&self) -> Option<Ipv4> {
        if !self.valid {
            return None;
        }
        self.original.parse().ok()
    }
}
