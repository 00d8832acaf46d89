use axum::Json;
use serde_json::{json, Value};
use crate::samples::example_contracts;

pub async fn list_examples() -> Json<Value> {
    Json(json!({ "examples": example_contracts() }))
}
