use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    async fn health(&self, context: &Context<'_>) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.health.check().await?)
    }
}
