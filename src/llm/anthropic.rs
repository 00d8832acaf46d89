use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::config::LLMSettings;
use crate::errors::ObserverError;
use super::catalog;
use super::provider::LLMProvider;
use super::types::LLMResponse;
use tracing::debug;

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    pub fn new(settings: &LLMSettings) -> Result<Self, ObserverError> {
        let base_url = settings.base_url.clone().unwrap_or_else(|| {
            catalog::get_provider("anthropic")
                .map(|p| p.default_base_url)
                .unwrap_or("https://api.anthropic.com")
                .to_string()
        });
        Ok(Self {
            client: super::http_client(settings.timeout)?,
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            base_url,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    fn request_body(&self, prompt: &str, system: Option<&str>) -> Value {
        let mut body = json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": [{"role": "user", "content": prompt}]
        });

        if let Some(sys) = system {
            body["system"] = json!(sys);
        }
        body
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, ObserverError> {
        let body = self.request_body(prompt, system);

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| super::transport_error("Anthropic API", e))?;

        let status = resp.status();
        if status == 429 {
            return Err(ObserverError::RateLimit("Anthropic rate limit exceeded".into()));
        }
        if status == 401 {
            return Err(ObserverError::Authentication("Invalid Anthropic API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| ObserverError::LLMApi(format!("Failed to parse Anthropic response: {}", e)))?;

        if let Some(error) = data.get("error") {
            let msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(ObserverError::LLMApi(msg.to_string()));
        }

        let content = extract_text(&data)
            .ok_or_else(|| ObserverError::LLMApi("No content in Anthropic response".into()))?;

        let input_tokens = data["usage"]["input_tokens"].as_u64();
        let output_tokens = data["usage"]["output_tokens"].as_u64();

        debug!(model = %self.model, input_tokens, output_tokens, "Anthropic completion");

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "anthropic" }
    fn model_name(&self) -> &str { &self.model }
}

/// Concatenate every text block of a Messages API reply.
fn extract_text(data: &Value) -> Option<String> {
    let blocks = data["content"].as_array()?;
    let text: Vec<&str> = blocks.iter()
        .filter(|b| b["type"] == "text")
        .filter_map(|b| b["text"].as_str())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}
