use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::errors::ObserverError;
use crate::models::{ExploitSubmission, Severity};
use super::Database;

const SELECT_EXPLOIT: &str = "SELECT id, title, description, code, target_contract, vulnerability_type, severity, author, tags, submitted_at FROM exploits";

/// Aggregate counts over every stored submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploitStats {
    pub total: usize,
    pub by_severity: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

impl Database {
    pub fn insert_exploit(&self, exploit: &ExploitSubmission) -> Result<(), ObserverError> {
        let tags = serde_json::to_string(&exploit.tags)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO exploits (id, title, description, code, target_contract, vulnerability_type, severity, author, tags, submitted_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                exploit.id,
                exploit.title,
                exploit.description,
                exploit.code,
                exploit.target_contract,
                exploit.vulnerability_type,
                exploit.severity.as_str(),
                exploit.author,
                tags,
                exploit.submitted_at.to_rfc3339(),
            ],
        ).map_err(|e| ObserverError::Database(format!("Failed to insert exploit: {}", e)))?;
        Ok(())
    }

    /// Every submission in the order it was received.
    pub fn list_exploits(&self) -> Result<Vec<ExploitSubmission>, ObserverError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY rowid ASC", SELECT_EXPLOIT))
            .map_err(|e| ObserverError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map([], read_row)
            .map_err(|e| ObserverError::Database(format!("Query error: {}", e)))?;

        let mut exploits = Vec::new();
        for row in rows {
            let raw = row.map_err(|e| ObserverError::Database(format!("Row error: {}", e)))?;
            exploits.push(raw.into_submission()?);
        }
        Ok(exploits)
    }

    pub fn get_exploit(&self, id: &str) -> Result<Option<ExploitSubmission>, ObserverError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", SELECT_EXPLOIT))
            .map_err(|e| ObserverError::Database(format!("Query failed: {}", e)))?;

        let mut rows = stmt.query_map(rusqlite::params![id], read_row)
            .map_err(|e| ObserverError::Database(format!("Query error: {}", e)))?;

        match rows.next() {
            Some(row) => {
                let raw = row.map_err(|e| ObserverError::Database(format!("Row error: {}", e)))?;
                Ok(Some(raw.into_submission()?))
            }
            None => Ok(None),
        }
    }

    pub fn exploit_stats(&self) -> Result<ExploitStats, ObserverError> {
        let conn = self.lock()?;
        let mut stats = ExploitStats::default();

        let mut stmt = conn.prepare("SELECT severity, vulnerability_type FROM exploits")
            .map_err(|e| ObserverError::Database(format!("Query failed: {}", e)))?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| ObserverError::Database(format!("Query error: {}", e)))?;

        for row in rows {
            let (severity, kind) = row.map_err(|e| ObserverError::Database(format!("Row error: {}", e)))?;
            stats.total += 1;
            *stats.by_severity.entry(severity).or_default() += 1;
            *stats.by_type.entry(kind).or_default() += 1;
        }
        Ok(stats)
    }
}

/// Row as stored, before the text columns are parsed back.
struct ExploitRow {
    id: String,
    title: String,
    description: String,
    code: String,
    target_contract: String,
    vulnerability_type: String,
    severity: String,
    author: String,
    tags: String,
    submitted_at: String,
}

fn read_row(row: &rusqlite::Row) -> rusqlite::Result<ExploitRow> {
    Ok(ExploitRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        code: row.get(3)?,
        target_contract: row.get(4)?,
        vulnerability_type: row.get(5)?,
        severity: row.get(6)?,
        author: row.get(7)?,
        tags: row.get(8)?,
        submitted_at: row.get(9)?,
    })
}

impl ExploitRow {
    fn into_submission(self) -> Result<ExploitSubmission, ObserverError> {
        let severity: Severity = self.severity.parse()
            .map_err(|e| ObserverError::Database(format!("Corrupt exploit {}: {}", self.id, e)))?;
        let submitted_at = DateTime::parse_from_rfc3339(&self.submitted_at)
            .map_err(|e| ObserverError::Database(format!("Corrupt exploit {}: {}", self.id, e)))?
            .with_timezone(&Utc);

        Ok(ExploitSubmission {
            tags: serde_json::from_str(&self.tags)?,
            id: self.id,
            title: self.title,
            description: self.description,
            code: self.code,
            target_contract: self.target_contract,
            vulnerability_type: self.vulnerability_type,
            severity,
            author: self.author,
            submitted_at,
        })
    }
}
