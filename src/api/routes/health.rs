use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "observer",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.analyzer.provider_name(),
        "model": state.analyzer.model_name(),
        "build": {
            "timestamp": option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
            "gitHash": option_env!("GIT_HASH").unwrap_or("dev"),
        },
    }))
}
