use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

pub use crate::modules::health::use_cases::check_health::inbound::graphql::HealthQuery;
pub use crate::modules::scores::use_cases::calculate_score::inbound::graphql::MutationRoot;
pub use crate::modules::scores::use_cases::get_score::inbound::graphql::ScoreQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ScoreQuery, HealthQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> axum::response::Html<String> {
    use async_graphql::http::GraphiQLSource;
    axum::response::Html(GraphiQLSource::build().endpoint("/gql").finish())
}
