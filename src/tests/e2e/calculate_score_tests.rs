use crate::modules::health::use_cases::check_health::handler::StaticHealthChecker;
use crate::modules::scores::adapters::outbound::demo_action_source::DemoActionSource;
use crate::modules::scores::adapters::outbound::score_repository::ScoreRepository;
use crate::modules::scores::adapters::outbound::score_repository_in_memory::InMemoryScoreRepository;
use crate::modules::scores::core::actions::UserAction;
use crate::modules::scores::core::score::UserScore;
use crate::modules::scores::use_cases::calculate_score::handler::ScoreCalculator;
use crate::shell::graphql::schema;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::action_source::StubActionSource;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn calculates_scores_through_the_router_and_keeps_the_latest() {
    let repository = Arc::new(InMemoryScoreRepository::new());
    let state = AppState::new(
        Arc::new(DemoActionSource::new()),
        repository.clone(),
        Arc::new(StaticHealthChecker),
    );
    let app = router(state.clone(), schema(state));

    for (user_id, expected) in [
        ("user_beginner", 1),
        ("user_active", 27),
        ("user_power", 150),
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::post(format!("/scores/calculate?user_id={user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "user_id": user_id, "score": expected })
        );
        assert_eq!(
            repository.get(user_id).await,
            Some(UserScore::new(user_id, expected))
        );
    }

    let health = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    let bytes = health.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], br#"{"status":"ok"}"#);

    assert_eq!(repository.len().await, 3);
}

#[tokio::test]
async fn concurrent_calculations_leave_one_score_per_user() {
    let repository = Arc::new(InMemoryScoreRepository::new());
    let source = StubActionSource::returning(vec![
        UserAction::new("login", 1),
        UserAction::new("quiz_answer", 2),
    ]);
    let calculator = Arc::new(ScoreCalculator::new(Arc::new(source), repository.clone()));

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let calculator = calculator.clone();
            let user_id = format!("user-{}", i % 4);
            tokio::spawn(async move { calculator.calculate(&user_id).await })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), Ok(5));
    }

    assert_eq!(repository.len().await, 4);
    for i in 0..4 {
        assert_eq!(
            repository.get(&format!("user-{i}")).await,
            Some(UserScore::new(format!("user-{i}"), 5))
        );
    }
}
