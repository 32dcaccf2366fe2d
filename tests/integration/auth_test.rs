//! Integration tests for login, logout, and the identity gate.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;

use helpers::{CountingProvider, EMAIL, PASSWORD, TestApp, USER_ID, memory_provider};
use tutor_core::error::AppError;
use tutor_database::memory::MemoryUserStore;

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "success": true }));

    let cookie = response.set_cookie().expect("missing Set-Cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(response.session_cookie().is_some());
    assert_eq!(app.provider.calls(), 1);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), Some("Invalid login credentials"));
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_missing_fields_never_reach_provider() {
    let app = TestApp::new();

    let bodies = [
        serde_json::json!({ "email": EMAIL }),
        serde_json::json!({ "password": PASSWORD }),
        serde_json::json!({ "email": "", "password": PASSWORD }),
        serde_json::json!({ "email": EMAIL, "password": "" }),
        serde_json::json!({ "email": null, "password": PASSWORD }),
        serde_json::json!({ "email": EMAIL, "password": null }),
        serde_json::json!({ "email": null, "password": null }),
        serde_json::json!({}),
    ];

    for body in bodies {
        let response = app.request("POST", "/api/auth/login", Some(body), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error(), Some("Email and password required"));
    }

    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = TestApp::new();

    let response = app
        .send(
            "POST",
            "/api/auth/login",
            "{ not json".to_string(),
            vec![("Content-Type".to_string(), "application/json".to_string())],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error().is_some_and(|e| e.starts_with("Invalid request body")));
    assert_eq!(app.provider.calls(), 0);
}

#[tokio::test]
async fn test_login_provider_failure_is_server_error() {
    let provider = Arc::new(CountingProvider::failing(
        memory_provider(),
        AppError::internal("connection refused"),
    ));
    let app = TestApp::with_backends(provider, Arc::new(MemoryUserStore::new()));

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), Some("Server error"));
}

#[tokio::test]
async fn test_me_with_cookie_and_bearer() {
    let app = TestApp::new();
    let token = app.login().await;

    let by_cookie = app.request_with_cookie("GET", "/api/auth/me", &token).await;
    assert_eq!(by_cookie.status, StatusCode::OK);
    assert_eq!(by_cookie.body["id"], USER_ID);
    assert_eq!(by_cookie.body["email"], EMAIL);

    let by_bearer = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(by_bearer.status, StatusCode::OK);
    assert_eq!(by_bearer.body["id"], USER_ID);
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = TestApp::new();

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body, serde_json::json!({ "error": "Unauthorized" }));

    let bogus = app
        .request("GET", "/api/auth/me", None, Some("not-a-session"))
        .await;
    assert_eq!(bogus.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bogus.body, serde_json::json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_logout_invalidates_session_and_clears_cookie() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request_with_cookie("POST", "/api/auth/logout", &token)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "success": true }));

    let cookie = response.set_cookie().expect("missing Set-Cookie");
    assert!(cookie.contains("Max-Age=0"));
    assert!(response.session_cookie().is_none());

    let after = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_succeeds() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn test_logout_provider_error_is_bad_request() {
    let provider = Arc::new(CountingProvider::failing(
        memory_provider(),
        AppError::external("Session not found"),
    ));
    let app = TestApp::with_backends(provider, Arc::new(MemoryUserStore::new()));

    let response = app
        .request("POST", "/api/auth/logout", None, Some("some-token"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("Session not found"));
}

#[tokio::test]
async fn test_logout_unexpected_failure_is_server_error() {
    let provider = Arc::new(CountingProvider::failing(
        memory_provider(),
        AppError::internal("socket closed"),
    ));
    let app = TestApp::with_backends(provider, Arc::new(MemoryUserStore::new()));

    let response = app
        .request("POST", "/api/auth/logout", None, Some("some-token"))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), Some("Server error"));
}
