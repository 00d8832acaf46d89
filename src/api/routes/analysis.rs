use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::{json, Value};
use crate::api::AppState;
use crate::api::errors::{bad_request, failure, ApiError};
use crate::api::models::{body_or_default, non_blank, AnalyzeRequest};
use crate::analysis::AnalysisResult;

pub async fn analyze_contract(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let req = body_or_default(body);
    let code = non_blank(&req.contract_code)
        .ok_or_else(|| bad_request("Contract code is required"))?;

    state.analyzer.analyze(code, req.contract_address.as_deref())
        .await
        .map(Json)
        .map_err(|e| failure("Analysis failed", e))
}

pub async fn list_vulnerable_contracts(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "contracts": state.registry.records() }))
}

pub async fn lookup_vulnerable_contract(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<Value> {
    match state.registry.find(&address) {
        Some(contract) => Json(json!({ "found": true, "contract": contract })),
        None => Json(json!({ "found": false })),
    }
}
