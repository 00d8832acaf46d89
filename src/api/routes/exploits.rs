use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use crate::api::AppState;
use crate::api::models::body_or_default;
use crate::errors::ObserverError;
use crate::models::NewExploit;
use tracing::info;

pub async fn submit_exploit(
    State(state): State<AppState>,
    body: Result<Json<NewExploit>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ObserverError> {
    let exploit = body_or_default::<NewExploit>(body).into_submission()?;
    state.db.insert_exploit(&exploit)?;
    info!(id = %exploit.id, severity = %exploit.severity, "Exploit submitted");
    Ok((StatusCode::CREATED, Json(json!({ "exploit": exploit }))))
}

pub async fn list_exploits(State(state): State<AppState>) -> Result<Json<Value>, ObserverError> {
    let exploits = state.db.list_exploits()?;
    Ok(Json(json!({ "exploits": exploits })))
}

pub async fn get_exploit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ObserverError> {
    match state.db.get_exploit(&id)? {
        Some(exploit) => Ok(Json(json!({ "exploit": exploit }))),
        None => Err(ObserverError::NotFound(format!("Exploit {} not found", id))),
    }
}

pub async fn exploit_stats(State(state): State<AppState>) -> Result<Json<Value>, ObserverError> {
    let stats = state.db.exploit_stats()?;
    Ok(Json(json!(stats)))
}
