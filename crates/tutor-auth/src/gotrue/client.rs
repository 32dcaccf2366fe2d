//! HTTP implementation of [`IdentityProvider`] for GoTrue.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Response, StatusCode};
use tracing::{debug, info, warn};

use tutor_core::config::AuthConfig;
use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;
use tutor_entity::session::{Identity, Session};

use super::types::{GoTrueErrorBody, GoTrueUser, TokenResponse};
use crate::jwt::AccessTokenVerifier;
use crate::provider::IdentityProvider;

/// Identity provider backed by a GoTrue-compatible REST API.
#[derive(Debug, Clone)]
pub struct GoTrueProvider {
    client: reqwest::Client,
    /// Base of the auth API, e.g. `https://project.example.co/auth/v1`.
    auth_url: String,
    api_key: String,
    /// Present when a signing secret is configured.
    verifier: Option<AccessTokenVerifier>,
}

impl GoTrueProvider {
    /// Creates a provider from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.url.is_empty() {
            return Err(AppError::configuration(
                "auth.url is required for the gotrue identity provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build identity provider client: {e}"),
                    e,
                )
            })?;

        let verifier = config
            .jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(AccessTokenVerifier::new);

        Ok(Self {
            client,
            auth_url: format!("{}/auth/v1", config.url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            verifier,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.auth_url, path)
    }

    async fn fetch_user(&self, access_token: &str) -> AppResult<Option<Identity>> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| unreachable_provider("session validation", e))?;

        let status = response.status();
        if status.is_success() {
            let user = response
                .json::<GoTrueUser>()
                .await
                .map_err(|e| malformed_response("session validation", e))?;
            return user.into_identity().map(Some);
        }

        if status.is_client_error() {
            debug!(status = %status, "Identity provider rejected session");
            return Ok(None);
        }

        let message = error_message(response).await;
        Err(AppError::internal(format!(
            "Identity provider returned {status} during session validation: {message}"
        )))
    }
}

#[async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn validate_session(&self, access_token: &str) -> AppResult<Option<Identity>> {
        match &self.verifier {
            Some(verifier) => Ok(verifier.verify(access_token)),
            None => self.fetch_user(access_token).await,
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session> {
        let response = self
            .client
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| unreachable_provider("sign-in", e))?;

        let status = response.status();
        if status.is_success() {
            let tokens = response
                .json::<TokenResponse>()
                .await
                .map_err(|e| malformed_response("sign-in", e))?;
            let session = tokens.into_session(Utc::now())?;
            info!(user_id = %session.identity.user_id, "Password sign-in succeeded");
            return Ok(session);
        }

        let message = error_message(response).await;
        if status.is_client_error() {
            warn!(status = %status, message = %message, "Password sign-in rejected");
            return Err(AppError::unauthorized(message));
        }

        Err(AppError::internal(format!(
            "Identity provider returned {status} during sign-in: {message}"
        )))
    }

    async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()> {
        let Some(token) = access_token else {
            debug!("Sign-out without a session credential");
            return Ok(());
        };

        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| unreachable_provider("sign-out", e))?;

        let status = response.status();
        if status.is_success() || session_already_gone(status) {
            info!(status = %status, "Signed out");
            return Ok(());
        }

        let message = error_message(response).await;
        warn!(status = %status, message = %message, "Sign-out refused by identity provider");
        Err(AppError::external(message))
    }

    fn backend(&self) -> &'static str {
        "gotrue"
    }
}

/// The credential was already invalid, which is what sign-out wants anyway.
fn session_already_gone(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    )
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<GoTrueErrorBody>(&body)
        .ok()
        .and_then(|b| b.message().map(str::to_string))
        .unwrap_or_else(|| format!("Identity provider returned {status}"))
}

fn unreachable_provider(operation: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Internal,
        format!("Identity provider unreachable during {operation}: {err}"),
        err,
    )
}

fn malformed_response(operation: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Internal,
        format!("Malformed identity provider response during {operation}: {err}"),
        err,
    )
}
