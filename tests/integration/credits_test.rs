//! Integration tests for the credits endpoint.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::{FailingStore, TestApp};

async fn credits_for(stored: Option<Value>) -> Value {
    let app = TestApp::with_credits(stored);
    let token = app.login().await;

    let response = app.request_with_cookie("GET", "/api/credits", &token).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body
}

#[tokio::test]
async fn test_credits_requires_session() {
    let app = TestApp::with_credits(Some(json!(42)));

    let response = app.request("GET", "/api/credits", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Unauthorized" }));

    let response = app
        .request("GET", "/api/credits", None, Some("forged-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_stored_balance_is_returned() {
    assert_eq!(credits_for(Some(json!(42))).await, json!({ "credits": 42 }));
    assert_eq!(credits_for(Some(json!(0))).await, json!({ "credits": 0 }));
}

#[tokio::test]
async fn test_missing_row_defaults() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app.request("GET", "/api/credits", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "credits": 15 }));
}

#[tokio::test]
async fn test_unusable_values_default() {
    for stored in [
        None,
        Some(Value::Null),
        Some(json!("lots")),
        Some(json!(-3)),
        Some(json!(2.5)),
        Some(json!({ "amount": 7 })),
    ] {
        assert_eq!(credits_for(stored).await, json!({ "credits": 15 }));
    }
}

#[tokio::test]
async fn test_store_failure_is_bad_request() {
    let app = TestApp::with_store(Arc::new(FailingStore {
        message: "permission denied for table users".to_string(),
    }));
    let token = app.login().await;

    let response = app.request("GET", "/api/credits", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "permission denied for table users" })
    );
}
