//! Request and response bodies for the transport layer.

use serde::{Deserialize, Deserializer, Serialize};

/// A missing or `null` list reads as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Input of one analysis: typed VPC and subnet lists plus the untagged
/// legacy list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cidrs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vpc_cidrs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subnet_cidrs: Vec<String>,
}

impl AnalysisRequest {
    /// Legacy-only request.
    pub fn from_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Self {
        AnalysisRequest {
            cidrs: cidrs.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Default::default()
        }
    }

    /// Append the lists of `other` to this request.
    pub fn extend(&mut self, other: AnalysisRequest) {
        self.cidrs.extend(other.cidrs);
        self.vpc_cidrs.extend(other.vpc_cidrs);
        self.subnet_cidrs.extend(other.subnet_cidrs);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    /// Missing reads as empty, which then fails validation.
    #[serde(default)]
    pub cidr: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
