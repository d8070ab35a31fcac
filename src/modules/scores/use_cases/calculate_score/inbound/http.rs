use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::scores::use_cases::calculate_score::handler::CalculateScoreError;
use crate::shared::http::responses::{error_response, method_not_allowed};
use crate::shell::state::AppState;

pub const USER_ID_PARAM: &str = "user_id";
pub const USER_ID_REQUIRED: &str = "user_id is required";
pub const USER_NOT_FOUND: &str = "user not found";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculateScoreResponse {
    pub user_id: String,
    pub score: i64,
}

/// First `user_id` value of the query string. Later repetitions are ignored and
/// an empty first value counts as missing.
fn first_user_id(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == USER_ID_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// `POST /scores/calculate?user_id=<id>`
pub async fn handle(
    method: Method,
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    if method != Method::POST {
        return method_not_allowed();
    }

    let Some(user_id) = query.ok().and_then(|Query(pairs)| first_user_id(pairs)) else {
        return error_response(StatusCode::BAD_REQUEST, USER_ID_REQUIRED);
    };

    match state.calculator.calculate(&user_id).await {
        Ok(score) => {
            tracing::info!(user_id = %user_id, score, "score calculated");
            let body = CalculateScoreResponse { user_id, score };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(CalculateScoreError::UserNotFound) => {
            tracing::warn!(user_id = %user_id, "score requested for unknown user");
            error_response(StatusCode::NOT_FOUND, USER_NOT_FOUND)
        }
        Err(error) => {
            tracing::error!(user_id = %user_id, %error, "score calculation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
