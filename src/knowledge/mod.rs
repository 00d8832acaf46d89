pub mod matcher;
pub mod types;

pub use matcher::detect;
pub use types::{AttackVector, Indicators, SecurityPrinciple, VulnerabilityPattern};

use serde::Deserialize;
use crate::errors::ObserverError;
use tracing::info;

const BUILTIN_KNOWLEDGE: &str = include_str!("../../data/knowledge.yaml");

/// Immutable catalog of vulnerability patterns, attack vectors and security
/// principles. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    patterns: Vec<VulnerabilityPattern>,
    vectors: Vec<AttackVector>,
    principles: Vec<SecurityPrinciple>,
}

impl KnowledgeBase {
    pub fn builtin() -> Result<Self, ObserverError> {
        Self::from_yaml(BUILTIN_KNOWLEDGE)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ObserverError> {
        let kb: KnowledgeBase = serde_yaml::from_str(content)?;
        info!(
            patterns = kb.patterns.len(),
            vectors = kb.vectors.len(),
            principles = kb.principles.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    pub fn new(
        patterns: Vec<VulnerabilityPattern>,
        vectors: Vec<AttackVector>,
        principles: Vec<SecurityPrinciple>,
    ) -> Self {
        Self { patterns, vectors, principles }
    }

    pub fn patterns(&self) -> &[VulnerabilityPattern] {
        &self.patterns
    }

    pub fn vectors(&self) -> &[AttackVector] {
        &self.vectors
    }

    pub fn principles(&self) -> &[SecurityPrinciple] {
        &self.principles
    }

    pub fn analyze_patterns(&self, source: &str) -> Vec<&VulnerabilityPattern> {
        detect(source, &self.patterns)
    }

    pub fn identify_attack_vectors(&self, source: &str) -> Vec<&AttackVector> {
        detect(source, &self.vectors)
    }

    pub fn check_principles(&self, source: &str) -> Vec<&SecurityPrinciple> {
        detect(source, &self.principles)
    }

    /// Render the detections for `source` as the knowledge-base section of
    /// the analysis prompt.
    pub fn analysis_context(&self, source: &str) -> String {
        let patterns = self.analyze_patterns(source);
        let vectors = self.identify_attack_vectors(source);
        let principles = self.check_principles(source);

        let mut out = String::from("## Blockchain Security Knowledge Base Context\n\n");

        out.push_str(&format!("### Detected Vulnerability Patterns ({}):\n", patterns.len()));
        for p in &patterns {
            out.push_str(&format!(
                "\n**{}** ({})\n- Description: {}\n- Exploit Method: {}\n- Real-World Examples: {}\n- Mitigation: {}\n",
                p.name,
                p.category,
                p.description,
                p.exploit_method,
                p.real_world_examples.join(", "),
                p.mitigation,
            ));
        }

        out.push_str(&format!("\n### Applicable Attack Vectors ({}):\n", vectors.len()));
        for v in &vectors {
            out.push_str(&format!(
                "\n**{}** [{}]\n- {}\n- Prerequisites: {}\n- Impact: {}\n",
                v.name,
                v.severity.as_str().to_uppercase(),
                v.description,
                v.prerequisites.join(", "),
                v.impact,
            ));
        }

        out.push_str(&format!("\n### Security Principle Violations ({}):\n", principles.len()));
        for p in &principles {
            out.push_str(&format!(
                "\n**{}**\n- {}\n- Examples: {}\n",
                p.principle,
                p.explanation,
                p.examples.join(" | "),
            ));
        }

        out.push_str(
            "\nLet this knowledge inform the analysis: read it through the power dynamics \
             and structural weaknesses it exposes.\n",
        );
        out
    }
}
