pub mod extract;
pub mod gateway;
pub mod persona;
pub mod prompt;
pub mod types;

pub use extract::extract_json_object;
pub use gateway::ContractAnalyzer;
pub use types::{AnalysisResult, PowerStructure, Vulnerability};

use serde::Serialize;
use crate::knowledge::KnowledgeBase;
use crate::registry::{MatchResult, VulnerableRegistry};

/// Everything that can be said about a contract without asking the model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFindings {
    pub patterns: Vec<String>,
    pub attack_vectors: Vec<String>,
    pub principle_violations: Vec<String>,
    pub known_vulnerable_interactions: Vec<MatchResult>,
}

pub fn local_findings(knowledge: &KnowledgeBase, registry: &VulnerableRegistry, source: &str) -> LocalFindings {
    LocalFindings {
        patterns: knowledge.analyze_patterns(source).iter().map(|p| p.name.clone()).collect(),
        attack_vectors: knowledge.identify_attack_vectors(source).iter().map(|v| v.name.clone()).collect(),
        principle_violations: knowledge.check_principles(source).iter().map(|p| p.principle.clone()).collect(),
        known_vulnerable_interactions: registry.cross_reference(source),
    }
}
