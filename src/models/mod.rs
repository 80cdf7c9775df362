//! Domain models for CIDR analysis.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the address codec
//! - [`CidrRange`] - one parsed input entry
//! - [`Gap`], [`Overlap`], [`Summary`] and [`AnalysisResult`] - analysis output
//! - [`AnalysisRequest`] and friends - transport bodies

mod analysis;
mod cidr_range;
mod ipv4;
mod request;

// Re-export public types
pub use analysis::{AnalysisResult, Gap, Overlap, OverlapKind, Summary};
pub use cidr_range::{Category, CidrRange};
pub use ipv4::{
    address_to_int, get_cidr_mask, int_to_address, num_addresses, num_usable_hosts, Ipv4,
    MAX_LENGTH,
};
pub use request::{AnalysisRequest, ErrorResponse, HealthResponse, ValidationRequest};
