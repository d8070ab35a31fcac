use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use user_scores::modules::health::use_cases::check_health::handler::StaticHealthChecker;
use user_scores::modules::scores::adapters::outbound::demo_action_source::DemoActionSource;
use user_scores::modules::scores::adapters::outbound::score_repository_in_memory::InMemoryScoreRepository;
use user_scores::shell::config::Config;
use user_scores::shell::graphql::schema;
use user_scores::shell::http::router;
use user_scores::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    // In-memory deps for now
    let action_source = Arc::new(DemoActionSource::new());
    let repository = Arc::new(InMemoryScoreRepository::new());
    let state = AppState::new(action_source, repository, Arc::new(StaticHealthChecker));

    let app = router(state.clone(), schema(state)).layer(TraceLayer::new_for_http());

    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
