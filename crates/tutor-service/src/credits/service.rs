//! Credits lookup for an authenticated user.

use std::sync::Arc;

use tracing::{debug, warn};

use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_database::UserStore;

use super::policy::narrow_credits;

/// Read-only access to users' credit balances.
#[derive(Debug, Clone)]
pub struct CreditsService {
    store: Arc<dyn UserStore>,
}

impl CreditsService {
    /// Creates a service reading from `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Returns the effective balance of the user the handle is scoped to.
    ///
    /// A missing row or unusable credits value yields the default balance;
    /// a store failure is returned as a lookup error.
    pub async fn get_credits(&self, handle: &LookupHandle) -> AppResult<u64> {
        let user_id = handle.user_id();
        let record = self.store.find_user(handle).await.inspect_err(|e| {
            warn!(user_id = %user_id, backend = self.store.backend(), error = %e, "Credits lookup failed");
        })?;

        let credits = narrow_credits(record.as_ref().and_then(|r| r.credits.as_ref()));
        debug!(user_id = %user_id, found = record.is_some(), credits, "Credits resolved");
        Ok(credits)
    }
}
