use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::errors::ObserverError;
use super::severity::Severity;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous";
const DEFAULT_VULNERABILITY_TYPE: &str = "other";

/// A user-submitted exploit write-up. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploitSubmission {
    pub id: String,
    pub title: String,
    pub description: String,
    pub code: String,
    pub target_contract: String,
    pub vulnerability_type: String,
    pub severity: Severity,
    pub author: String,
    pub tags: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Submission body as posted by clients: everything except id and timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExploit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub target_contract: Option<String>,
    pub vulnerability_type: Option<String>,
    pub severity: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewExploit {
    /// Validate the body and stamp it with a fresh id and submission time.
    pub fn into_submission(self) -> Result<ExploitSubmission, ObserverError> {
        let title = required(self.title, "title")?;
        let code = required(self.code, "code")?;

        let severity = match self.severity.as_deref().map(str::trim) {
            None | Some("") => Severity::Medium,
            Some(raw) => raw.parse().map_err(ObserverError::Validation)?,
        };

        let author = match self.author.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => ANONYMOUS_AUTHOR.to_string(),
        };

        let vulnerability_type = self.vulnerability_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_VULNERABILITY_TYPE.to_string());

        let tags = self.tags.iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        Ok(ExploitSubmission {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description: self.description.unwrap_or_default().trim().to_string(),
            code,
            target_contract: self.target_contract.unwrap_or_default().trim().to_string(),
            vulnerability_type,
            severity,
            author,
            tags,
            submitted_at: Utc::now(),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ObserverError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ObserverError::Validation(format!("Exploit {} is required", field))),
    }
}
