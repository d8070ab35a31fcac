use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::scores::core::score::UserScore;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct GqlUserScore {
    pub user_id: String,
    pub score: i64,
}

impl From<UserScore> for GqlUserScore {
    fn from(s: UserScore) -> Self {
        Self {
            user_id: s.user_id,
            score: s.score,
        }
    }
}

#[derive(Default)]
pub struct ScoreQuery;

#[Object]
impl ScoreQuery {
    /// Last score stored for the user, null when it was never calculated.
    async fn score(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Option<GqlUserScore>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.scores.get(&user_id).await.map(Into::into))
    }
}
