//! Wire types of the GoTrue REST API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Deserialize;

use tutor_core::error::AppError;
use tutor_core::types::UserId;
use tutor_entity::session::{Identity, Session};

/// User object returned by `/user` and embedded in token responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl GoTrueUser {
    /// Converts to a domain identity, rejecting an empty subject.
    pub fn into_identity(self) -> Result<Identity, AppError> {
        let user_id = UserId::parse(self.id)
            .ok_or_else(|| AppError::internal("Identity provider returned an empty user id"))?;
        Ok(Identity {
            user_id,
            email: self.email,
        })
    }
}

/// Successful response of `/token?grant_type=password`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Absolute expiry in seconds since epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: GoTrueUser,
}

impl TokenResponse {
    /// Converts to a domain session relative to `now`.
    pub fn into_session(self, now: DateTime<Utc>) -> Result<Session, AppError> {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => Utc.timestamp_opt(at, 0).single(),
            (None, Some(secs)) => Some(now + Duration::seconds(secs)),
            (None, None) => None,
        };

        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            identity: self.user.into_identity()?,
        })
    }
}

/// Error body. GoTrue versions disagree on the field carrying the message,
/// so every known spelling is accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoTrueErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GoTrueErrorBody {
    /// The most descriptive message present, if any.
    pub fn message(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .or(self.error.as_deref())
    }
}
