use serde::{Deserialize, Deserializer, Serialize};
use crate::models::Severity;
use crate::registry::MatchResult;

/// Structured verdict assembled from the model reply plus the local
/// cross-reference matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(deserialize_with = "deserialize_probability")]
    pub scam_probability: u8,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default)]
    pub power_dynamics: PowerStructure,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub observer_insight: String,
    /// Always the local computation; whatever the model put here is ignored.
    #[serde(default, skip_deserializing)]
    pub known_vulnerable_interactions: Vec<MatchResult>,
}

impl AnalysisResult {
    /// Vulnerabilities ordered most severe first; ties keep reply order.
    pub fn vulnerabilities_by_severity(&self) -> Vec<&Vulnerability> {
        let mut sorted: Vec<&Vulnerability> = self.vulnerabilities.iter().collect();
        sorted.sort_by_key(|v| v.severity.rank());
        sorted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub severity: Severity,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub implication: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerStructure {
    #[serde(default)]
    pub centralization_points: Vec<String>,
    #[serde(default)]
    pub privileged_actors: Vec<String>,
    #[serde(default)]
    pub exit_mechanisms: Vec<String>,
    #[serde(default)]
    pub hidden_incentives: Vec<String>,
}

/// Accept any JSON number (or numeric string) and clamp it into 0..=100.
fn deserialize_probability<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().trim_end_matches('%').trim().parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid scamProbability '{}'", s)))?,
    };

    if !value.is_finite() {
        return Err(serde::de::Error::custom("scamProbability must be finite"));
    }
    Ok(value.round().clamp(0.0, 100.0) as u8)
}
