use std::path::Path;
use crate::errors::ObserverError;
use super::types::ObserverConfig;
use super::security::validate_security_patterns;
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

/// Load the configuration file when one is given, otherwise the defaults.
pub async fn load_config(path: Option<&Path>) -> Result<ObserverConfig, ObserverError> {
    match path {
        Some(p) => parse_config(p).await,
        None => Ok(ObserverConfig::default()),
    }
}

pub async fn parse_config(path: &Path) -> Result<ObserverConfig, ObserverError> {
    if !path.exists() {
        return Err(ObserverError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ObserverError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    info!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<ObserverConfig, ObserverError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(ObserverConfig::default());
    }

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: ObserverConfig = serde_yaml::from_value(yaml)?;
    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema. Advisory: mismatches are logged.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ObserverError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| ObserverError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ObserverError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values the service cannot run with.
fn validate_values(config: &ObserverConfig) -> Result<(), ObserverError> {
    if let Some(llm) = &config.llm {
        if let Some(t) = llm.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ObserverError::Config(format!("llm.temperature must be within 0..=2, got {}", t)));
            }
        }
        if llm.timeout_secs == Some(0) {
            return Err(ObserverError::Config("llm.timeout_secs must be at least 1".into()));
        }
        if llm.max_tokens == Some(0) {
            return Err(ObserverError::Config("llm.max_tokens must be at least 1".into()));
        }
    }

    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(ObserverError::Config("server.port must be non-zero".into()));
        }
    }

    Ok(())
}
