use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::errors::ObserverError;
use crate::llm::catalog;
use super::credentials::resolve_credential;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "./data/observer.db";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";
pub const DEFAULT_PROVIDER: &str = "anthropic";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ObserverConfig {
    pub server: Option<ServerConfig>,
    pub llm: Option<LLMConfig>,
    pub storage: Option<StorageConfig>,
    pub registry: Option<RegistryConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub public_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    pub db_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RegistryConfig {
    pub extra_contracts_path: Option<String>,
}

impl ObserverConfig {
    pub fn host(&self) -> String {
        self.server.as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn public_dir(&self) -> String {
        self.server.as_ref()
            .and_then(|s| s.public_dir.clone())
            .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())
    }

    pub fn db_path(&self) -> String {
        self.storage.as_ref()
            .and_then(|s| s.db_path.clone())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    }

    pub fn extra_contracts_path(&self) -> Option<String> {
        self.registry.as_ref().and_then(|r| r.extra_contracts_path.clone())
    }
}

/// Fully resolved model settings. Building one fails when the provider needs
/// a credential and none is configured.
#[derive(Debug, Clone)]
pub struct LLMSettings {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl LLMSettings {
    pub fn resolve(config: Option<&LLMConfig>) -> Result<Self, ObserverError> {
        Self::resolve_with(config, |var| std::env::var(var).ok())
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve_with<F>(config: Option<&LLMConfig>, env: F) -> Result<Self, ObserverError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = LLMConfig::default();
        let config = config.unwrap_or(&default);

        let provider_id = config.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);
        let provider = catalog::get_provider(provider_id)
            .ok_or_else(|| ObserverError::Config(format!("Unknown LLM provider: {}", provider_id)))?;

        let configured_key = config.api_key.as_deref()
            .and_then(|v| resolve_credential(v, &env));
        let api_key = match configured_key {
            Some(key) => key,
            None if provider.env_var.is_empty() => String::new(),
            None => env(provider.env_var)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ObserverError::Config(format!(
                    "{} is not set in environment variables",
                    provider.env_var
                )))?,
        };

        let model = config.model.clone()
            .unwrap_or_else(|| catalog::get_default_model(provider_id).to_string());

        Ok(Self {
            provider: provider_id.to_string(),
            model,
            api_key,
            base_url: config.base_url.clone(),
            temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
