//! Request context produced by the identity gate.

use tutor_core::types::{LookupHandle, UserId};
use tutor_entity::session::Identity;

/// Context for the current authenticated request.
///
/// Built by [`AuthService::authenticate`](crate::auth::AuthService::authenticate)
/// and passed into service methods so that every operation knows *who* is
/// acting and holds the capability to look up data on their behalf.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved identity.
    pub identity: Identity,
    /// Capability for user-store lookups scoped to this request.
    pub handle: LookupHandle,
}

impl RequestContext {
    /// Creates a context for `identity`, binding the presented access token.
    pub fn new(identity: Identity, access_token: impl Into<String>) -> Self {
        let handle = LookupHandle::new(identity.user_id.clone(), access_token);
        Self { identity, handle }
    }

    /// The authenticated user's id.
    pub fn user_id(&self) -> &UserId {
        &self.identity.user_id
    }
}
