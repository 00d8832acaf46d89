use std::sync::Arc;
use std::time::Duration;
use crate::errors::ObserverError;
use crate::knowledge::KnowledgeBase;
use crate::llm::{LLMProvider, LLMResponse};
use crate::registry::VulnerableRegistry;
use crate::utils::truncation::{preview, truncate_error};
use super::extract::extract_json_object;
use super::persona::OBSERVER_SYSTEM_PROMPT;
use super::prompt::{analysis_prompt, chat_prompt};
use super::types::AnalysisResult;
use tracing::{debug, info, warn};

/// Sends composed prompts to the configured model and turns replies into
/// results. One model call per operation, never retried.
pub struct ContractAnalyzer {
    llm: Arc<dyn LLMProvider>,
    knowledge: Arc<KnowledgeBase>,
    registry: Arc<VulnerableRegistry>,
    timeout: Duration,
}

impl ContractAnalyzer {
    pub fn new(
        llm: Arc<dyn LLMProvider>,
        knowledge: Arc<KnowledgeBase>,
        registry: Arc<VulnerableRegistry>,
        timeout: Duration,
    ) -> Self {
        Self { llm, knowledge, registry, timeout }
    }

    pub fn provider_name(&self) -> &str {
        self.llm.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    pub async fn analyze(&self, source: &str, address: Option<&str>) -> Result<AnalysisResult, ObserverError> {
        let matches = self.registry.cross_reference(source);
        let knowledge_context = self.knowledge.analysis_context(source);
        let prompt = analysis_prompt(source, address, &matches, &knowledge_context, self.registry.records());

        info!(
            source_len = source.len(),
            address = address.unwrap_or(""),
            known_matches = matches.len(),
            "Analyzing contract"
        );

        let reply = self.complete(&prompt).await?;
        let value = extract_json_object(&reply.content)?;
        let mut result: AnalysisResult = serde_json::from_value(value).map_err(|e| {
            ObserverError::Parse(format!("{} in reply: {}", e, truncate_error(&reply.content)))
        })?;

        if result.scam_probability >= 70 {
            warn!(scam_probability = result.scam_probability, "High scam probability");
        }

        result.known_vulnerable_interactions = matches;
        Ok(result)
    }

    pub async fn chat(&self, message: &str, contract_context: Option<&str>) -> Result<String, ObserverError> {
        let prompt = chat_prompt(message, contract_context, self.registry.records());
        info!(has_context = contract_context.is_some(), "Chat message");
        let reply = self.complete(&prompt).await?;
        Ok(reply.content)
    }

    async fn complete(&self, prompt: &str) -> Result<LLMResponse, ObserverError> {
        let call = self.llm.complete(prompt, Some(OBSERVER_SYSTEM_PROMPT));
        let reply = tokio::time::timeout(self.timeout, call).await.map_err(|_| {
            ObserverError::Timeout(format!(
                "{} did not answer within {}s",
                self.llm.provider_name(),
                self.timeout.as_secs()
            ))
        })??;

        debug!(
            provider = self.llm.provider_name(),
            model = %reply.model,
            input_tokens = reply.input_tokens,
            output_tokens = reply.output_tokens,
            reply = %preview(&reply.content),
            "Model reply"
        );
        Ok(reply)
    }
}
