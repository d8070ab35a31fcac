// In memory implementation of the ScoreRepository port.
//
// Purpose
// - Hold the latest score per user for the lifetime of the process.
//
// Responsibilities
// - Serialize every read and write behind one mutex.
// - Hold the lock for a single map access only.

use crate::modules::scores::adapters::outbound::score_repository::{
    ScoreRepository, ScoreRepositoryError,
};
use crate::modules::scores::core::score::UserScore;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryScoreRepository {
    scores: Mutex<HashMap<String, UserScore>>,
    is_offline: bool,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.scores.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scores.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn save(&self, score: UserScore) -> Result<(), ScoreRepositoryError> {
        if self.is_offline {
            return Err(ScoreRepositoryError::Backend(
                "Score repository offline".into(),
            ));
        }

        self.scores
            .lock()
            .await
            .insert(score.user_id.clone(), score);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Option<UserScore> {
        self.scores.lock().await.get(user_id).cloned()
    }
}
