//! Settings API tests.

mod common;

use serde_json::json;

use common::TestContext;

/// Defaults match the application defaults.
#[tokio::test]
async fn test_get_default_settings() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/settings").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["use_global_goals"], false);
    assert_eq!(body["default_time_goal"], 15);
    assert_eq!(body["default_words_goal"], 10);
}

/// Partial updates leave the other fields alone.
#[tokio::test]
async fn test_partial_update() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: serde_json::Value = server
        .put("/api/settings")
        .json(&json!({ "use_global_goals": true, "default_time_goal": 30 }))
        .await
        .json();
    assert_eq!(body["use_global_goals"], true);
    assert_eq!(body["default_time_goal"], 30);
    assert_eq!(body["default_words_goal"], 10);

    // Settings persist across requests within the same state.
    let body: serde_json::Value = server.get("/api/settings").await.json();
    assert_eq!(body["default_time_goal"], 30);
}
