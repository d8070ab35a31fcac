use serde::{Deserialize, Serialize};

/// Latest computed aggregate for a user. The repository owns it once saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScore {
    pub user_id: String,
    pub score: i64,
}

impl UserScore {
    pub fn new(user_id: impl Into<String>, score: i64) -> Self {
        Self {
            user_id: user_id.into(),
            score,
        }
    }
}
