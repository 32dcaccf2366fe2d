//! Identity gate, login, and logout on top of the identity provider.

use std::sync::Arc;

use tracing::{error, info, warn};

use tutor_auth::IdentityProvider;
use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;
use tutor_entity::session::Session;

use crate::context::RequestContext;

/// Message of every identity-gate rejection.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Message of a login rejected before contacting the provider.
pub const MISSING_CREDENTIALS: &str = "Email and password required";

/// Session flows delegated to the identity provider.
#[derive(Debug, Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    /// Creates a service delegating to `provider`.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Resolves the presented credential to a request context.
    ///
    /// Every failure, including a provider outage, is reported as the same
    /// unauthorized error so callers cannot distinguish the cases.
    pub async fn authenticate(&self, access_token: Option<&str>) -> AppResult<RequestContext> {
        let Some(token) = access_token.filter(|t| !t.is_empty()) else {
            return Err(AppError::unauthorized(UNAUTHORIZED));
        };

        match self.provider.validate_session(token).await {
            Ok(Some(identity)) => Ok(RequestContext::new(identity, token)),
            Ok(None) => Err(AppError::unauthorized(UNAUTHORIZED)),
            Err(e) => {
                warn!(
                    backend = self.provider.backend(),
                    error = %e,
                    "Session validation failed; treating request as unauthenticated"
                );
                Err(AppError::unauthorized(UNAUTHORIZED))
            }
        }
    }

    /// Signs in with email and password.
    ///
    /// - either field empty: validation error, provider not contacted
    /// - credentials rejected: unauthorized error with the provider's message
    /// - anything else going wrong: internal error
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Session> {
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_CREDENTIALS));
        }

        match self.provider.sign_in_with_password(email, password).await {
            Ok(session) => {
                info!(user_id = %session.identity.user_id, "Login succeeded");
                Ok(session)
            }
            Err(e) if e.kind == ErrorKind::Unauthorized => {
                info!(reason = %e.message, "Login rejected");
                Err(e)
            }
            Err(e) => {
                error!(backend = self.provider.backend(), error = %e, "Login failed");
                Err(AppError::internal(format!("Sign-in failed: {}", e.message)))
            }
        }
    }

    /// Signs out the session behind `access_token`, if any.
    ///
    /// A provider refusal keeps its message; any other failure becomes an
    /// internal error.
    pub async fn logout(&self, access_token: Option<&str>) -> AppResult<()> {
        let token = access_token.filter(|t| !t.is_empty());

        match self.provider.sign_out(token).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind == ErrorKind::ExternalService => Err(e),
            Err(e) => {
                error!(backend = self.provider.backend(), error = %e, "Logout failed");
                Err(AppError::internal(format!("Sign-out failed: {}", e.message)))
            }
        }
    }
}
