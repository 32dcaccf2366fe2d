//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tutor_api::{AppState, build_router};
use tutor_auth::{IdentityProvider, MemoryIdentityProvider};
use tutor_core::config::AppConfig;
use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_database::UserStore;
use tutor_database::memory::MemoryUserStore;
use tutor_entity::session::{Identity, Session};
use tutor_entity::user::UserRecord;

pub const USER_ID: &str = "user-ada";
pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "analytical-engine";
pub const COOKIE_NAME: &str = "tutor-session";

/// Identity provider wrapper that counts calls and can be told to fail.
#[derive(Debug)]
pub struct CountingProvider {
    inner: MemoryIdentityProvider,
    calls: AtomicUsize,
    failure: Option<AppError>,
}

impl CountingProvider {
    pub fn new(inner: MemoryIdentityProvider) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    /// Every call fails with `failure` after being counted.
    pub fn failing(inner: MemoryIdentityProvider, failure: AppError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(inner)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for CountingProvider {
    async fn validate_session(&self, access_token: &str) -> AppResult<Option<Identity>> {
        self.record()?;
        self.inner.validate_session(access_token).await
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session> {
        self.record()?;
        self.inner.sign_in_with_password(email, password).await
    }

    async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()> {
        self.record()?;
        self.inner.sign_out(access_token).await
    }

    fn backend(&self) -> &'static str {
        "counting"
    }
}

/// User store whose every lookup fails.
#[derive(Debug)]
pub struct FailingStore {
    pub message: String,
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_user(&self, _handle: &LookupHandle) -> AppResult<Option<UserRecord>> {
        Err(AppError::lookup(self.message.clone()))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

/// Memory provider with the standard test account registered.
pub fn memory_provider() -> MemoryIdentityProvider {
    let provider = MemoryIdentityProvider::new(3600);
    provider
        .register(USER_ID, EMAIL, PASSWORD)
        .expect("Failed to register test account");
    provider
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Identity provider behind the router
    pub provider: Arc<CountingProvider>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Memory backends, one account, no user-store rows.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryUserStore::new()))
    }

    /// Memory identity backend over the given user store.
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self::with_backends(Arc::new(CountingProvider::new(memory_provider())), store)
    }

    /// Memory user store holding a single row for the test account.
    pub fn with_credits(credits: Option<Value>) -> Self {
        let store = MemoryUserStore::new();
        store.insert(UserRecord::new(USER_ID, credits));
        Self::with_store(Arc::new(store))
    }

    pub fn with_backends(provider: Arc<CountingProvider>, store: Arc<dyn UserStore>) -> Self {
        let mut config = AppConfig::default();
        config.auth.provider = "memory".to_string();
        config.auth.session_cookie.secure = false;
        config.database.provider = "memory".to_string();

        let state = AppState::new(
            config.clone(),
            provider.clone() as Arc<dyn IdentityProvider>,
            store,
        );

        Self {
            router: build_router(state),
            provider,
            config,
        }
    }

    /// Logs the test account in and returns the issued access token.
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": EMAIL, "password": PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);

        response
            .session_cookie()
            .expect("Login did not set a session cookie")
    }

    /// Make a JSON request, optionally with a Bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        self.send(method, path, body_str, headers).await
    }

    /// Make a request carrying the session cookie.
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        token: &str,
    ) -> TestResponse {
        let headers = vec![(
            "Cookie".to_string(),
            format!("{}={}", COOKIE_NAME, token),
        )];
        self.send(method, path, String::new(), headers).await
    }

    /// Make a request with a raw body and explicit headers.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            req = req.header(name, value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Raw `Set-Cookie` header, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get("set-cookie")
            .and_then(|v| v.to_str().ok())
    }

    /// Value of the session cookie set by the response, if non-empty.
    pub fn session_cookie(&self) -> Option<String> {
        let header = self.set_cookie()?;
        let pair = header.split(';').next()?;
        let value = pair.strip_prefix(&format!("{}=", COOKIE_NAME))?;
        (!value.is_empty()).then(|| value.to_string())
    }

    /// The `error` field of an error body.
    pub fn error(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}
