use crate::modules::health::use_cases::check_health::handler::HealthChecker;
use crate::modules::scores::adapters::outbound::action_source::ActionSource;
use crate::modules::scores::adapters::outbound::score_repository::ScoreRepository;
use crate::modules::scores::use_cases::calculate_score::handler::ScoreCalculator;
use std::sync::Arc;

pub type AppScoreCalculator = ScoreCalculator<dyn ActionSource, dyn ScoreRepository>;

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<AppScoreCalculator>,
    pub scores: Arc<dyn ScoreRepository>,
    pub health: Arc<dyn HealthChecker>,
}

impl AppState {
    /// Wires the use cases over adapters built by the caller. The calculator
    /// and the score query share `repository`.
    pub fn new(
        action_source: Arc<dyn ActionSource>,
        repository: Arc<dyn ScoreRepository>,
        health: Arc<dyn HealthChecker>,
    ) -> Self {
        let calculator = Arc::new(ScoreCalculator::new(action_source, repository.clone()));
        Self {
            calculator,
            scores: repository,
            health,
        }
    }
}
