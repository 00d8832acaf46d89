use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn list_patterns(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "patterns": state.knowledge.patterns() }))
}

pub async fn list_vectors(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "vectors": state.knowledge.vectors() }))
}

pub async fn list_principles(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "principles": state.knowledge.principles() }))
}
