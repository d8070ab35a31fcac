use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::scores::use_cases::calculate_score::inbound::http::USER_ID_REQUIRED;
use crate::modules::scores::use_cases::get_score::inbound::graphql::GqlUserScore;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn calculate_score(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<GqlUserScore> {
        if user_id.is_empty() {
            return Err(async_graphql::Error::new(USER_ID_REQUIRED));
        }

        let state = context.data_unchecked::<AppState>();
        let score = state
            .calculator
            .calculate(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlUserScore { user_id, score })
    }
}
