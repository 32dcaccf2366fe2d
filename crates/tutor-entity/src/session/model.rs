//! Provider-issued session and resolved identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tutor_core::types::UserId;

/// The user a valid session resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable subject identifier.
    pub user_id: UserId,
    /// Email address, when the provider reports one.
    pub email: Option<String>,
}

/// A session issued by the identity provider on successful sign-in.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer credential presented on later requests.
    pub access_token: String,
    /// Credential for renewing the access token, if issued.
    pub refresh_token: Option<String>,
    /// When the access token stops being valid.
    pub expires_at: Option<DateTime<Utc>>,
    /// The signed-in user.
    pub identity: Identity,
}

impl Session {
    /// Seconds until expiry, if the provider reported one.
    pub fn expires_in_seconds(&self) -> Option<i64> {
        self.expires_at
            .map(|at| (at - Utc::now()).num_seconds().max(0))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("expires_at", &self.expires_at)
            .field("identity", &self.identity)
            .finish()
    }
}
