//! User store trait implemented by every backend.

use async_trait::async_trait;

use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_entity::user::UserRecord;

/// Single-row, read-only access to user records.
///
/// Implementations must return `Ok(None)` when no row exists for the
/// handle's user and reserve `Err` for genuine store failures, which are
/// reported as [`ErrorKind::Lookup`](tutor_core::error::ErrorKind::Lookup).
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the row keyed by the handle's user id.
    async fn find_user(&self, handle: &LookupHandle) -> AppResult<Option<UserRecord>>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
