// Scoring rules.
//
// Purpose
// - Turn a list of actions into one integer score.
//
// Responsibilities
// - Map an action type onto its rule.
// - Skip actions with a non-positive amount, whatever their type.
// - Fold the contributions with saturating arithmetic. Every contribution is
//   non-negative, so the result does not depend on the order of the actions.
//
// Boundaries
// - Pure functions. No input or output, no logging.

use crate::modules::scores::core::actions::UserAction;

const LOGIN_POINTS: i64 = 1;
const CHALLENGE_COMPLETED_MULTIPLIER: i64 = 10;
const QUIZ_ANSWER_MULTIPLIER: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Login,
    ChallengeCompleted,
    QuizAnswer,
    Unknown,
}

impl ActionKind {
    pub fn parse(action_type: &str) -> Self {
        match action_type {
            "login" => ActionKind::Login,
            "challenge_completed" => ActionKind::ChallengeCompleted,
            "quiz_answer" => ActionKind::QuizAnswer,
            _ => ActionKind::Unknown,
        }
    }
}

pub fn contribution(action: &UserAction) -> i64 {
    if action.amount <= 0 {
        return 0;
    }

    match ActionKind::parse(&action.action_type) {
        ActionKind::Login => LOGIN_POINTS,
        ActionKind::ChallengeCompleted => {
            action.amount.saturating_mul(CHALLENGE_COMPLETED_MULTIPLIER)
        }
        ActionKind::QuizAnswer => action.amount.saturating_mul(QUIZ_ANSWER_MULTIPLIER),
        ActionKind::Unknown => 0,
    }
}

pub fn score_actions(actions: &[UserAction]) -> i64 {
    actions
        .iter()
        .map(contribution)
        .fold(0, i64::saturating_add)
}
