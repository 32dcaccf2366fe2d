//! Request-scoped capability for user-store lookups.

use std::fmt;

use super::id::UserId;

/// Capability produced by the identity gate for one request.
///
/// Carries the authenticated user id together with the access token the
/// request presented, so that stores enforcing row-level security can act
/// on the user's behalf.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupHandle {
    user_id: UserId,
    access_token: String,
}

impl LookupHandle {
    /// Creates a handle for the given user and access token.
    pub fn new(user_id: UserId, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: access_token.into(),
        }
    }

    /// The authenticated user this handle is scoped to.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// The access token presented by the request.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for LookupHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupHandle")
            .field("user_id", &self.user_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
