use std::collections::HashSet;
use std::sync::LazyLock;
use regex::Regex;
use super::types::{MatchResult, VulnerableAddressRecord};

pub const DIRECT_MATCH_REASON: &str = "Direct address reference found in contract code";

static ADDRESS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[xX][0-9a-fA-F]{40}").expect("valid address regex"));
static VALUE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)call\{value:").expect("valid value-call regex"));
static RAW_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.call\(").expect("valid raw-call regex"));

/// Code-shape heuristics mapped onto catalog entries by their vulnerability text.
///
/// Address and call-shape matching are case-insensitive; the literal
/// keyword checks below are case-sensitive Solidity identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    FeeRounding,
    Reentrancy,
    HiddenTransferRestrictions,
    CentralizedMint,
    UncheckedExternalCall,
}

impl Heuristic {
    /// Evaluation order, which is also the order of heuristic matches.
    pub const ALL: [Heuristic; 5] = [
        Heuristic::FeeRounding,
        Heuristic::Reentrancy,
        Heuristic::HiddenTransferRestrictions,
        Heuristic::CentralizedMint,
        Heuristic::UncheckedExternalCall,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Heuristic::FeeRounding => "fee rounding vulnerability",
            Heuristic::Reentrancy => "reentrancy",
            Heuristic::HiddenTransferRestrictions => "hidden transfer restrictions",
            Heuristic::CentralizedMint => "centralized mint",
            Heuristic::UncheckedExternalCall => "unchecked external call",
        }
    }

    pub fn triggered(&self, source: &str) -> bool {
        match self {
            Heuristic::FeeRounding => {
                source.contains("/ 100000") || source.contains("/ FEE_DENOMINATOR")
            }
            Heuristic::Reentrancy => {
                VALUE_CALL.is_match(source) && !source.contains("nonReentrant")
            }
            Heuristic::HiddenTransferRestrictions => {
                source.contains("_beforeTokenTransfer") || source.contains("_canTransfer")
            }
            Heuristic::CentralizedMint => {
                source.contains("function mint") && source.contains("onlyOwner")
            }
            // Any "if" substring (including inside identifiers) counts as a check.
            Heuristic::UncheckedExternalCall => {
                RAW_CALL.is_match(source) && !source.contains("require") && !source.contains("if")
            }
        }
    }

    pub fn match_reason(&self) -> String {
        format!("Similar vulnerability pattern detected: {}", self.label())
    }
}

/// Address-shaped tokens (`0x` + exactly 40 hex digits) in source order.
/// Longer hex runs such as 32-byte hashes are not addresses and are skipped.
pub fn extract_addresses(source: &str) -> Vec<&str> {
    ADDRESS_TOKEN.find_iter(source)
        .filter(|m| {
            let followed_by_hex = source[m.end()..].chars().next()
                .is_some_and(|c| c.is_ascii_hexdigit());
            let preceded_by_word = source[..m.start()].chars().next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
            !followed_by_hex && !preceded_by_word
        })
        .map(|m| m.as_str())
        .collect()
}

pub fn detect_heuristics(source: &str) -> Vec<Heuristic> {
    Heuristic::ALL.into_iter().filter(|h| h.triggered(source)).collect()
}

/// Cross-reference `source` against the vulnerable-address catalog.
///
/// Direct address references come first in source order, followed by
/// heuristic matches in evaluation order. No address appears twice; a direct
/// reference wins over a heuristic match for the same record.
pub fn cross_reference(source: &str, records: &[VulnerableAddressRecord]) -> Vec<MatchResult> {
    let mut matches = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for address in extract_addresses(source) {
        if let Some(record) = records.iter().find(|r| r.has_address(address)) {
            if seen.insert(record.address.to_lowercase()) {
                matches.push(MatchResult::from_record(record, DIRECT_MATCH_REASON));
            }
        }
    }

    for heuristic in detect_heuristics(source) {
        let label = heuristic.label();
        let similar = records.iter()
            .find(|r| r.vulnerability.to_lowercase().contains(label));
        if let Some(record) = similar {
            if seen.insert(record.address.to_lowercase()) {
                matches.push(MatchResult::from_record(record, heuristic.match_reason()));
            }
        }
    }

    matches
}
