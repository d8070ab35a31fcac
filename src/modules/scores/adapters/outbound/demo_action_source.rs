// Fixed action data for local runs. Stands in for a real upstream service.

use crate::modules::scores::adapters::outbound::action_source::{ActionSource, ActionSourceError};
use crate::modules::scores::core::actions::UserAction;
use async_trait::async_trait;

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoActionSource;

impl DemoActionSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ActionSource for DemoActionSource {
    async fn get_actions(&self, user_id: &str) -> Result<Vec<UserAction>, ActionSourceError> {
        match user_id {
            "user_beginner" => Ok(vec![
                UserAction::new("login", 1),
                UserAction::new("challenge_completed", 0),
                UserAction::new("quiz_answer", 0),
            ]),
            "user_active" => Ok(vec![
                UserAction::new("login", 1),
                UserAction::new("challenge_completed", 2),
                UserAction::new("quiz_answer", 3),
            ]),
            "user_power" => Ok(vec![
                UserAction::new("login", 0),
                UserAction::new("challenge_completed", 10),
                UserAction::new("quiz_answer", 25),
            ]),
            "user_empty" => Ok(Vec::new()),
            "user_error" => Err(ActionSourceError::Unavailable(
                "simulated service error".into(),
            )),
            _ => Err(ActionSourceError::NotFound),
        }
    }
}
