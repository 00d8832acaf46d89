use std::collections::BTreeMap;

const TALA_EXPLOITER: &str = include_str!("../../data/contracts/tala_exploiter.sol");
const FEE_TOKEN: &str = include_str!("../../data/contracts/fee_token.sol");

/// Demonstration contracts served to clients, keyed by name.
pub fn example_contracts() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("tala-exploiter", TALA_EXPLOITER),
        ("fee-token", FEE_TOKEN),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VulnerableRegistry;

    #[test]
    fn test_examples_present() {
        let examples = example_contracts();
        assert_eq!(examples.len(), 2);
        assert!(examples["tala-exploiter"].contains("contract TalaExploiter"));
    }

    #[test]
    fn test_tala_exploiter_hits_catalog_once() {
        let registry = VulnerableRegistry::builtin().unwrap();
        let matches = registry.cross_reference(example_contracts()["tala-exploiter"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "TALA Token");
    }

    #[test]
    fn test_fee_token_triggers_heuristics() {
        let registry = VulnerableRegistry::builtin().unwrap();
        let names: Vec<String> = registry.cross_reference(example_contracts()["fee-token"])
            .into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["TALA Token", "HoneyPot Token", "RugPull NFT"]);
    }
}
