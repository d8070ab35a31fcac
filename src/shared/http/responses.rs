use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

/// JSON body of every failed REST call.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}
