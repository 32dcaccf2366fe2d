//! In-memory identity provider with Argon2-hashed accounts.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

use tutor_core::config::MemoryUserSeed;
use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_core::types::UserId;
use tutor_entity::session::{Identity, Session};

use crate::password::PasswordDigest;
use crate::provider::IdentityProvider;

/// Message returned for any rejected email/password pair.
pub const INVALID_CREDENTIALS: &str = "Invalid login credentials";

/// A registered account.
#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    email: String,
    digest: PasswordDigest,
}

/// An issued, not yet revoked session.
#[derive(Debug, Clone)]
struct IssuedSession {
    identity: Identity,
    expires_at: DateTime<Utc>,
}

/// Identity provider held in process memory.
///
/// Suitable for development and tests only; sessions are lost on restart.
#[derive(Debug, Clone)]
pub struct MemoryIdentityProvider {
    /// Accounts keyed by lower-cased email.
    accounts: Arc<DashMap<String, Account>>,
    /// Live sessions keyed by access token.
    sessions: Arc<DashMap<String, IssuedSession>>,
    session_ttl: Duration,
}

impl MemoryIdentityProvider {
    /// Creates an empty provider issuing sessions that live for `session_ttl_seconds`.
    pub fn new(session_ttl_seconds: i64) -> Self {
        Self {
            accounts: Arc::new(DashMap::new()),
            sessions: Arc::new(DashMap::new()),
            session_ttl: Duration::seconds(session_ttl_seconds),
        }
    }

    /// Creates a provider with the configured accounts registered.
    pub fn from_seeds(seeds: &[MemoryUserSeed], session_ttl_seconds: i64) -> AppResult<Self> {
        let provider = Self::new(session_ttl_seconds);
        for seed in seeds {
            provider.register(&seed.id, &seed.email, &seed.password)?;
        }
        Ok(provider)
    }

    /// Registers (or replaces) an account.
    pub fn register(&self, user_id: &str, email: &str, password: &str) -> AppResult<()> {
        let user_id = UserId::parse(user_id)
            .ok_or_else(|| AppError::configuration("Memory account requires a non-empty id"))?;
        let digest = PasswordDigest::create(password)?;

        self.accounts.insert(
            email.to_lowercase(),
            Account {
                user_id,
                email: email.to_string(),
                digest,
            },
        );
        Ok(())
    }

    /// Number of sessions held, expired ones included until swept.
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Drops every session whose lifetime has elapsed.
    fn sweep_expired(&self, now: DateTime<Utc>) {
        let before = self.sessions.len();
        self.sessions.retain(|_, issued| issued.expires_at > now);
        let swept = before.saturating_sub(self.sessions.len());
        if swept > 0 {
            debug!(swept, "Expired sessions swept");
        }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn validate_session(&self, access_token: &str) -> AppResult<Option<Identity>> {
        let Some(issued) = self.sessions.get(access_token).map(|s| s.value().clone()) else {
            return Ok(None);
        };

        if issued.expires_at <= Utc::now() {
            self.sessions.remove(access_token);
            debug!(user_id = %issued.identity.user_id, "Expired session evicted");
            return Ok(None);
        }

        Ok(Some(issued.identity))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session> {
        let Some(account) = self
            .accounts
            .get(&email.to_lowercase())
            .map(|a| a.value().clone())
        else {
            // Same Argon2 cost as a real comparison.
            PasswordDigest::create(password)?;
            warn!("Sign-in for unknown account");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !account.digest.matches(password)? {
            warn!(user_id = %account.user_id, "Sign-in with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let identity = Identity {
            user_id: account.user_id.clone(),
            email: Some(account.email.clone()),
        };
        let now = Utc::now();
        self.sweep_expired(now);

        let expires_at = now + self.session_ttl;
        let access_token = Uuid::new_v4().simple().to_string();

        self.sessions.insert(
            access_token.clone(),
            IssuedSession {
                identity: identity.clone(),
                expires_at,
            },
        );

        info!(user_id = %identity.user_id, "Password sign-in succeeded");
        Ok(Session {
            access_token,
            refresh_token: Some(Uuid::new_v4().simple().to_string()),
            expires_at: Some(expires_at),
            identity,
        })
    }

    async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()> {
        if let Some(token) = access_token {
            if let Some((_, issued)) = self.sessions.remove(token) {
                info!(user_id = %issued.identity.user_id, "Signed out");
            }
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
