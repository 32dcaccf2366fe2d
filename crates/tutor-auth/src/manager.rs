//! Identity manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use tutor_core::config::AuthConfig;
use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_entity::session::{Identity, Session};

use crate::gotrue::GoTrueProvider;
use crate::memory::MemoryIdentityProvider;
use crate::provider::IdentityProvider;

/// Identity manager that wraps the configured provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct IdentityManager {
    inner: Arc<dyn IdentityProvider>,
}

impl IdentityManager {
    /// Create a new identity manager from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let inner: Arc<dyn IdentityProvider> = match config.provider.as_str() {
            "gotrue" => {
                info!(
                    url = %config.url,
                    local_verification = config.jwt_secret.is_some(),
                    "Initializing GoTrue identity provider"
                );
                Arc::new(GoTrueProvider::new(config)?)
            }
            "memory" => {
                info!(
                    accounts = config.memory_users.len(),
                    "Initializing in-memory identity provider"
                );
                Arc::new(MemoryIdentityProvider::from_seeds(
                    &config.memory_users,
                    config.session_cookie.max_age_seconds,
                )?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown identity provider: '{other}'. Supported: gotrue, memory"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl IdentityProvider for IdentityManager {
    async fn validate_session(&self, access_token: &str) -> AppResult<Option<Identity>> {
        self.inner.validate_session(access_token).await
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session> {
        self.inner.sign_in_with_password(email, password).await
    }

    async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()> {
        self.inner.sign_out(access_token).await
    }

    fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}
