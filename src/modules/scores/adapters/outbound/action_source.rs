use crate::modules::scores::core::actions::UserAction;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionSourceError {
    #[error("user not found")]
    NotFound,

    #[error("{0}")]
    Unavailable(String),
}

/// Supplies the recorded actions of a user. Order is irrelevant to scoring and
/// an empty list is a valid answer.
#[async_trait]
pub trait ActionSource: Send + Sync {
    async fn get_actions(&self, user_id: &str) -> Result<Vec<UserAction>, ActionSourceError>;
}
