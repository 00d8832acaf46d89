use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use crate::errors::ObserverError;
use tracing::error;

pub type ApiError = (StatusCode, Json<Value>);

/// Log the full failure and answer `{error: label, message: detail}` with
/// the status the error classifies to.
pub fn failure(label: &str, err: ObserverError) -> ApiError {
    let class = err.classify();
    error!(error_type = class.error_type, error = %err, "{}", label);
    let status = StatusCode::from_u16(class.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": label, "message": err.to_string()})))
}

pub fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({"error": message})))
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        if class.status >= 500 {
            error!(error_type = class.error_type, error = %self, "Request failed");
        }
        let status = StatusCode::from_u16(class.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({"error": class.error_type, "message": self.to_string()}))).into_response()
    }
}
