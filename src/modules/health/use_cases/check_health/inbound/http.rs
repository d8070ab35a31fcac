use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::shared::http::responses::{error_response, method_not_allowed};
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// `GET /health`
pub async fn handle(method: Method, State(state): State<AppState>) -> Response {
    if method != Method::GET {
        return method_not_allowed();
    }

    match state.health.check().await {
        Ok(status) => (StatusCode::OK, Json(HealthResponse { status })).into_response(),
        Err(error) => {
            tracing::error!(%error, "health check failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
