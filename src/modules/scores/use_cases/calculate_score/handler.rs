use crate::modules::scores::adapters::outbound::action_source::{ActionSource, ActionSourceError};
use crate::modules::scores::adapters::outbound::score_repository::{
    ScoreRepository, ScoreRepositoryError,
};
use crate::modules::scores::core::rules::score_actions;
use crate::modules::scores::core::score::UserScore;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculateScoreError {
    #[error("user not found")]
    UserNotFound,

    #[error("failed to get actions: {0}")]
    FetchActions(ActionSourceError),

    #[error("failed to save score: {0}")]
    SaveScore(ScoreRepositoryError),
}

impl From<ActionSourceError> for CalculateScoreError {
    fn from(error: ActionSourceError) -> Self {
        match error {
            ActionSourceError::NotFound => CalculateScoreError::UserNotFound,
            other => CalculateScoreError::FetchActions(other),
        }
    }
}

/// Loads the actions of a user, scores them and stores the result.
///
/// Holds no state between calls. A failing action source aborts before the
/// repository is touched.
pub struct ScoreCalculator<TActionSource, TRepository>
where
    TActionSource: ActionSource + ?Sized + 'static,
    TRepository: ScoreRepository + ?Sized + 'static,
{
    action_source: Arc<TActionSource>,
    repository: Arc<TRepository>,
}

impl<TActionSource, TRepository> ScoreCalculator<TActionSource, TRepository>
where
    TActionSource: ActionSource + ?Sized + 'static,
    TRepository: ScoreRepository + ?Sized + 'static,
{
    pub fn new(action_source: Arc<TActionSource>, repository: Arc<TRepository>) -> Self {
        Self {
            action_source,
            repository,
        }
    }

    pub async fn calculate(&self, user_id: &str) -> Result<i64, CalculateScoreError> {
        let actions = self.action_source.get_actions(user_id).await?;

        let score = score_actions(&actions);
        tracing::debug!(user_id, actions = actions.len(), score, "score aggregated");

        self.repository
            .save(UserScore::new(user_id, score))
            .await
            .map_err(CalculateScoreError::SaveScore)?;

        Ok(score)
    }
}
