use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub contract_code: Option<String>,
    pub contract_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub contract_context: Option<String>,
}

/// `Some` only for a present, non-blank value.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// The request body, or an empty request when it is missing, not JSON, or
/// of the wrong shape. Handlers then reject it with their own message.
pub fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            debug!(rejection = %rejection.body_text(), "Unusable request body");
            T::default()
        }
    }
}
