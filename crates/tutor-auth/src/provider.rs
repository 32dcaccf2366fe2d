//! Narrow interface to the external identity provider.

use async_trait::async_trait;

use tutor_core::result::AppResult;
use tutor_entity::session::{Identity, Session};

/// Operations the service needs from an identity provider.
///
/// Error contract:
/// - `validate_session` returns `Ok(None)` for an absent, expired, or
///   revoked credential; `Err` only for transport or protocol failures.
/// - `sign_in_with_password` returns `ErrorKind::Unauthorized` carrying the
///   provider's message when credentials are rejected, `ErrorKind::Internal`
///   for anything unexpected.
/// - `sign_out` returns `ErrorKind::ExternalService` carrying the provider's
///   message when the provider refuses, `ErrorKind::Internal` for transport
///   failures. Signing out an unknown or already-invalid credential succeeds.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve an access token to the identity it belongs to.
    async fn validate_session(&self, access_token: &str) -> AppResult<Option<Identity>>;

    /// Exchange an email/password pair for a new session.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<Session>;

    /// Invalidate the session behind `access_token`, if any.
    async fn sign_out(&self, access_token: Option<&str>) -> AppResult<()>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
