//! Runtime configuration.
//!
//! Values come from command line flags, falling back to `CIDR_VIEWER_*`
//! environment variables (a `.env` file is loaded first) and then to the
//! defaults below.

use std::net::SocketAddr;
use std::time::Duration;

/// Default cap on pairwise overlap comparisons per analysis.
pub const DEFAULT_MAX_OVERLAP_COMPARISONS: usize = 1000;

/// Default HTTP listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Pairs compared by overlap detection before the scan is cut short.
    pub max_overlap_comparisons: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            max_overlap_comparisons: DEFAULT_MAX_OVERLAP_COMPARISONS,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub request_timeout: Duration,
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            analyzer: AnalyzerConfig::default(),
        }
    }
}
