use axum::{
    Extension, Router,
    routing::{any, get},
};

use crate::modules::health::use_cases::check_health::inbound::http as health_http;
use crate::modules::scores::use_cases::calculate_score::inbound::http as calculate_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    Router::new()
        .route("/scores/calculate", any(calculate_http::handle))
        .route("/health", any(health_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .with_state(state)
}
