use serde::{Deserialize, Serialize};
use crate::models::Severity;

/// An on-chain address previously identified as vulnerable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerableAddressRecord {
    pub address: String,
    pub chain: String,
    pub name: String,
    pub vulnerability: String,
    pub severity: Severity,
    pub exploitable: bool,
    #[serde(default)]
    pub notes: String,
    pub date_identified: String,
}

impl VulnerableAddressRecord {
    /// Addresses compare case-insensitively (checksummed vs lowercase hex).
    pub fn has_address(&self, address: &str) -> bool {
        self.address.eq_ignore_ascii_case(address)
    }
}

/// One cross-reference hit between the analyzed source and a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub address: String,
    pub chain: String,
    pub name: String,
    pub vulnerability: String,
    pub match_reason: String,
}

impl MatchResult {
    pub fn from_record(record: &VulnerableAddressRecord, reason: impl Into<String>) -> Self {
        Self {
            address: record.address.clone(),
            chain: record.chain.clone(),
            name: record.name.clone(),
            vulnerability: record.vulnerability.clone(),
            match_reason: reason.into(),
        }
    }
}
