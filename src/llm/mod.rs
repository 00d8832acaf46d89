pub mod provider;
pub mod anthropic;
pub mod openai;
pub mod local;
pub mod router;
pub mod types;
pub mod catalog;

pub use provider::LLMProvider;
pub use router::create_provider;
pub use types::LLMResponse;

use std::time::Duration;
use reqwest::Client;
use crate::errors::ObserverError;

/// HTTP client shared by the hosted providers, bounded by the configured
/// request timeout.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, ObserverError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ObserverError::Config(format!("Failed to build HTTP client: {}", e)))
}

pub(crate) fn transport_error(provider: &str, e: reqwest::Error) -> ObserverError {
    if e.is_timeout() {
        ObserverError::Timeout(format!("{} request timed out: {}", provider, e))
    } else {
        ObserverError::Network(format!("{} request failed: {}", provider, e))
    }
}
