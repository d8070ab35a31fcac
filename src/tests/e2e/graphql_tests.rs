use crate::modules::health::use_cases::check_health::handler::StaticHealthChecker;
use crate::modules::scores::adapters::outbound::demo_action_source::DemoActionSource;
use crate::modules::scores::adapters::outbound::score_repository_in_memory::InMemoryScoreRepository;
use crate::shell::graphql::schema;
use crate::shell::state::AppState;
use std::sync::Arc;

fn make_schema() -> crate::shell::graphql::AppSchema {
    let state = AppState::new(
        Arc::new(DemoActionSource::new()),
        Arc::new(InMemoryScoreRepository::new()),
        Arc::new(StaticHealthChecker),
    );
    schema(state)
}

#[tokio::test]
async fn calculate_score_mutation_stores_a_score_the_query_can_read() {
    let schema = make_schema();

    let before = schema
        .execute(r#"{ score(userId: "user_active") { userId score } }"#)
        .await;
    assert!(before.errors.is_empty());
    assert_eq!(
        before.data.into_json().unwrap(),
        serde_json::json!({ "score": null })
    );

    let calculate = r#"mutation { calculateScore(userId: "user_active") { userId score } }"#;
    let mutation = schema.execute(calculate).await;
    assert!(mutation.errors.is_empty());
    assert_eq!(
        mutation.data.into_json().unwrap(),
        serde_json::json!({ "calculateScore": { "userId": "user_active", "score": 27 } })
    );

    let after = schema
        .execute(r#"{ score(userId: "user_active") { userId score } health }"#)
        .await;
    assert!(after.errors.is_empty());
    assert_eq!(
        after.data.into_json().unwrap(),
        serde_json::json!({ "score": { "userId": "user_active", "score": 27 }, "health": "ok" })
    );
}

#[tokio::test]
async fn calculate_score_mutation_surfaces_errors() {
    let schema = make_schema();

    for (user_id, message) in [
        ("", "user_id is required"),
        ("nobody", "user not found"),
        ("user_error", "failed to get actions: simulated service error"),
    ] {
        let mutation = format!(
            r#"mutation {{ calculateScore(userId: "{user_id}") {{ score }} }}"#
        );
        let response = schema.execute(mutation).await;
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].message, message);
    }
}
