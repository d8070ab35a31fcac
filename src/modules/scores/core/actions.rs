use serde::{Deserialize, Serialize};

/// One recorded event for a user, as handed out by an action source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub amount: i64,
}

impl UserAction {
    pub fn new(action_type: impl Into<String>, amount: i64) -> Self {
        Self {
            action_type: action_type.into(),
            amount,
        }
    }
}
