pub mod cross_reference;
pub mod types;

pub use cross_reference::{cross_reference, detect_heuristics, extract_addresses, Heuristic, DIRECT_MATCH_REASON};
pub use types::{MatchResult, VulnerableAddressRecord};

use std::path::Path;
use crate::errors::ObserverError;
use tracing::{info, warn};

const BUILTIN_CONTRACTS: &str = include_str!("../../data/vulnerable_contracts.yaml");

/// Catalog of known vulnerable contract addresses. Fixed once loaded.
#[derive(Debug, Clone)]
pub struct VulnerableRegistry {
    records: Vec<VulnerableAddressRecord>,
}

impl VulnerableRegistry {
    pub fn builtin() -> Result<Self, ObserverError> {
        let records = parse_records(BUILTIN_CONTRACTS, "built-in catalog")?;
        info!(records = records.len(), "Loaded vulnerable contract catalog");
        Ok(Self { records })
    }

    pub fn new(records: Vec<VulnerableAddressRecord>) -> Self {
        Self { records }
    }

    /// Append records from an extra YAML file. Entries whose address is
    /// already present are skipped.
    pub fn extend_from_file(mut self, path: &Path) -> Result<Self, ObserverError> {
        if !path.exists() {
            return Err(ObserverError::Config(format!(
                "Vulnerable contracts file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let extra = parse_records(&content, &path.display().to_string())?;

        let mut added = 0;
        for record in extra {
            if self.find(&record.address).is_some() {
                warn!(address = %record.address, "Duplicate vulnerable contract entry skipped");
                continue;
            }
            self.records.push(record);
            added += 1;
        }
        info!(path = %path.display(), added, total = self.records.len(), "Extended vulnerable contract catalog");
        Ok(self)
    }

    pub fn records(&self) -> &[VulnerableAddressRecord] {
        &self.records
    }

    /// Case-insensitive lookup of a single address.
    pub fn find(&self, address: &str) -> Option<&VulnerableAddressRecord> {
        self.records.iter().find(|r| r.has_address(address.trim()))
    }

    pub fn cross_reference(&self, source: &str) -> Vec<MatchResult> {
        cross_reference(source, &self.records)
    }
}

fn parse_records(content: &str, origin: &str) -> Result<Vec<VulnerableAddressRecord>, ObserverError> {
    let records: Vec<VulnerableAddressRecord> = serde_yaml::from_str(content)?;
    for record in &records {
        if !is_address(&record.address) {
            return Err(ObserverError::Config(format!(
                "Invalid address '{}' for '{}' in {}",
                record.address, record.name, origin
            )));
        }
    }
    Ok(records)
}

/// `0x` followed by exactly 40 hex digits.
pub fn is_address(value: &str) -> bool {
    let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::models::Severity;

    #[test]
    fn test_builtin_catalog() {
        let registry = VulnerableRegistry::builtin().unwrap();
        assert_eq!(registry.records().len(), 5);
        assert_eq!(registry.records()[0].name, "TALA Token");
        assert_eq!(registry.records()[0].severity, Severity::Critical);
    }

    #[test]
    fn test_builtin_labels_resolve() {
        let registry = VulnerableRegistry::builtin().unwrap();
        for heuristic in Heuristic::ALL {
            let found = registry.records().iter()
                .any(|r| r.vulnerability.to_lowercase().contains(heuristic.label()));
            assert!(found, "no catalog entry for {}", heuristic.label());
        }
    }

    #[test]
    fn test_find_case_insensitive() {
        let registry = VulnerableRegistry::builtin().unwrap();
        let hit = registry.find("0X1234567890123456789012345678901234567890").unwrap();
        assert_eq!(hit.name, "TALA Token");
        assert!(registry.find("0x0000000000000000000000000000000000000000").is_none());
    }

    #[test]
    fn test_is_address() {
        assert!(is_address("0x1234567890123456789012345678901234567890"));
        assert!(is_address("0xABCDEFabcdef0000000000000000000000000000"));
        assert!(!is_address("0x123"));
        assert!(!is_address("1234567890123456789012345678901234567890"));
        assert!(!is_address("0xg234567890123456789012345678901234567890"));
    }

    #[test]
    fn test_invalid_address_rejected() {
        let yaml = r#"
- address: "0xnothex"
  chain: ethereum
  name: Broken
  vulnerability: x
  severity: low
  exploitable: false
  dateIdentified: "2024-01-01"
"#;
        let err = parse_records(yaml, "test").unwrap_err();
        assert!(matches!(err, ObserverError::Config(_)));
    }

    #[test]
    fn test_extend_from_file_skips_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"
- address: "0x1234567890123456789012345678901234567890"
  chain: ethereum
  name: Duplicate
  vulnerability: dup
  severity: low
  exploitable: false
  dateIdentified: "2024-06-01"
- address: "0x9999999999999999999999999999999999999999"
  chain: arbitrum
  name: Extra Vault
  vulnerability: Reentrancy through share redemption
  severity: high
  exploitable: true
  dateIdentified: "2024-06-02"
"#).unwrap();

        let registry = VulnerableRegistry::builtin().unwrap()
            .extend_from_file(file.path())
            .unwrap();
        assert_eq!(registry.records().len(), 6);
        assert_eq!(registry.find("0x1234567890123456789012345678901234567890").unwrap().name, "TALA Token");
        assert_eq!(registry.find("0x9999999999999999999999999999999999999999").unwrap().chain, "arbitrum");
    }

    #[test]
    fn test_extend_from_missing_file() {
        let result = VulnerableRegistry::builtin().unwrap()
            .extend_from_file(Path::new("/nonexistent/contracts.yaml"));
        assert!(matches!(result, Err(ObserverError::Config(_))));
    }
}
