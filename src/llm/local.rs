use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::LLMSettings;
use crate::errors::ObserverError;
use super::catalog;
use super::openai::{chat_body, parse_chat_reply};
use super::provider::LLMProvider;
use super::types::LLMResponse;

/// OpenAI-compatible endpoint on the local machine (Ollama, LM Studio, vLLM).
pub struct LocalProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_tokens: u32,
}

impl LocalProvider {
    pub fn new(settings: &LLMSettings) -> Result<Self, ObserverError> {
        let base_url = settings.base_url.clone().unwrap_or_else(|| {
            catalog::get_provider("local")
                .map(|p| p.default_base_url)
                .unwrap_or("http://localhost:11434/v1")
                .to_string()
        });
        Ok(Self {
            client: super::http_client(settings.timeout)?,
            base_url,
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }
}

#[async_trait]
impl LLMProvider for LocalProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, ObserverError> {
        let body = chat_body(&self.model, prompt, system, self.temperature, self.max_tokens);

        let mut request = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let resp = request.send().await
            .map_err(|e| super::transport_error("Local LLM", e))?;

        let data: Value = resp.json().await
            .map_err(|e| ObserverError::LLMApi(format!("Failed to parse local LLM response: {}", e)))?;

        parse_chat_reply(&data, "Local LLM", &self.model)
    }

    fn provider_name(&self) -> &str { "local" }
    fn model_name(&self) -> &str { &self.model }
}
