use std::sync::Arc;
use crate::config::LLMSettings;
use crate::errors::ObserverError;
use super::provider::LLMProvider;
use super::anthropic::AnthropicProvider;
use super::openai::OpenAIProvider;
use super::local::LocalProvider;

pub fn create_provider(settings: &LLMSettings) -> Result<Arc<dyn LLMProvider>, ObserverError> {
    match settings.provider.as_str() {
        "anthropic" => Ok(Arc::new(AnthropicProvider::new(settings)?)),
        "openai" => Ok(Arc::new(OpenAIProvider::new(settings)?)),
        "local" => Ok(Arc::new(LocalProvider::new(settings)?)),
        other => Err(ObserverError::Config(format!("Unknown LLM provider: {}", other))),
    }
}
