use crate::state::AppState;

use axum::{Json, extract::State, response::IntoResponse, response::Response};

use serde_json::json;

/// GET /health - liveness check
pub async fn health_check() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

/// GET /version - application name and version
pub async fn version(State(state): State<AppState>) -> Response {
    Json(json!({ "name": state.app_name, "version": state.app_version })).into_response()
}
