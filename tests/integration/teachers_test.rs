//! Integration tests for the explore catalog and health check.

mod helpers;

use axum::http::StatusCode;
use serde_json::Value;

use helpers::TestApp;

#[tokio::test]
async fn test_explore_lists_three_teachers() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/teachers/explore", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let teachers = response.body.as_array().expect("expected an array");
    assert_eq!(teachers.len(), 3);
    for teacher in teachers {
        assert!(teacher["id"].is_u64());
        assert!(teacher["name"].is_string());
        assert!(teacher["description"].is_string());
    }
}

#[tokio::test]
async fn test_explore_ignores_auth_and_input() {
    let app = TestApp::new();
    let anonymous = app.request("GET", "/api/teachers/explore", None, None).await;

    let token = app.login().await;
    let signed_in = app
        .request("GET", "/api/teachers/explore", None, Some(&token))
        .await;
    let with_junk = app
        .request("GET", "/api/teachers/explore?subject=art&page=9", None, Some("bogus"))
        .await;

    assert_eq!(signed_in.status, StatusCode::OK);
    assert_eq!(with_junk.status, StatusCode::OK);
    assert_eq!(anonymous.body, signed_in.body);
    assert_eq!(anonymous.body, with_junk.body);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(matches!(response.body["version"], Value::String(_)));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
