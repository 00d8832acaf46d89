use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::config::LLMSettings;
use crate::errors::ObserverError;
use super::catalog;
use super::provider::LLMProvider;
use super::types::LLMResponse;
use tracing::debug;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    pub fn new(settings: &LLMSettings) -> Result<Self, ObserverError> {
        let base_url = settings.base_url.clone().unwrap_or_else(|| {
            catalog::get_provider("openai")
                .map(|p| p.default_base_url)
                .unwrap_or("https://api.openai.com/v1")
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
}

/// Request body for an OpenAI-style `/chat/completions` call.
pub(crate) fn chat_body(model: &str, prompt: &str, system: Option<&str>, temperature: f32, max_tokens: u32) -> Value {
    let mut messages = Vec::new();
    if let Some(sys) = system {
        messages.push(json!({"role": "system", "content": sys}));
    }
    messages.push(json!({"role": "user", "content": prompt}));

    json!({
        "model": model,
        "messages": messages,
        "max_tokens": max_tokens,
        "temperature": temperature,
    })
}

/// Pull the assistant message out of a `/chat/completions` reply.
pub(crate) fn parse_chat_reply(data: &Value, provider: &str, model: &str) -> Result<LLMResponse, ObserverError> {
    if let Some(error) = data.get("error") {
        let msg = error["message"].as_str().unwrap_or("Unknown");
        return Err(ObserverError::LLMApi(format!("{}: {}", provider, msg)));
    }

    let content = data["choices"][0]["message"]["content"].as_str()
        .ok_or_else(|| ObserverError::LLMApi(format!("No content in {} response", provider)))?
        .to_string();

    Ok(LLMResponse {
        content,
        input_tokens: data["usage"]["prompt_tokens"].as_u64(),
        output_tokens: data["usage"]["completion_tokens"].as_u64(),
        model: model.to_string(),
    })
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, ObserverError> {
        let body = chat_body(&self.model, prompt, system, self.temperature, self.max_tokens);

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| super::transport_error("OpenAI", e))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(ObserverError::RateLimit("OpenAI rate limit".into()));
        }
        if status.as_u16() == 401 {
            return Err(ObserverError::Authentication("Invalid OpenAI API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| ObserverError::LLMApi(format!("Failed to parse OpenAI response: {}", e)))?;

        let response = parse_chat_reply(&data, "OpenAI", &self.model)?;
        debug!(model = %self.model, input_tokens = response.input_tokens, output_tokens = response.output_tokens, "OpenAI completion");
        Ok(response)
    }

    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}
