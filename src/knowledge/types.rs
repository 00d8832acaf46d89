use serde::{Deserialize, Serialize};
use crate::models::Severity;

/// Anything that carries a list of literal indicator strings the matcher
/// can look for in contract source.
pub trait Indicators {
    fn indicators(&self) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityPattern {
    pub name: String,
    pub category: String,
    pub description: String,
    pub indicators: Vec<String>,
    pub exploit_method: String,
    #[serde(default)]
    pub real_world_examples: Vec<String>,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackVector {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub code_patterns: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPrinciple {
    pub principle: String,
    pub explanation: String,
    pub violations: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Indicators for VulnerabilityPattern {
    fn indicators(&self) -> &[String] {
        &self.indicators
    }
}

impl Indicators for AttackVector {
    fn indicators(&self) -> &[String] {
        &self.code_patterns
    }
}

impl Indicators for SecurityPrinciple {
    fn indicators(&self) -> &[String] {
        &self.violations
    }
}
