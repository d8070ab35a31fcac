use crate::modules::scores::core::score::UserScore;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreRepositoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Latest-value store keyed by user id. `save` overwrites any earlier score for
/// the same user, no history is kept.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn save(&self, score: UserScore) -> Result<(), ScoreRepositoryError>;
    async fn get(&self, user_id: &str) -> Option<UserScore>;
}
