use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde_json::{json, Value};
use crate::api::AppState;
use crate::api::errors::{bad_request, failure, ApiError};
use crate::api::models::{body_or_default, non_blank, ChatRequest};

pub async fn send_message(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let req = body_or_default(body);
    let message = non_blank(&req.message)
        .ok_or_else(|| bad_request("Message is required"))?;

    let response = state.analyzer.chat(message, non_blank(&req.contract_context))
        .await
        .map_err(|e| failure("Chat failed", e))?;

    Ok(Json(json!({ "response": response })))
}
