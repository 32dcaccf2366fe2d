//! User repository backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_entity::user::UserRecord;

use crate::store::UserStore;

/// Reads the credits column as JSON so that whatever type the column has,
/// the raw value reaches the credits service intact. The filter compares the
/// bare primary key so the index serves the lookup.
const FIND_USER_SQL: &str =
    "SELECT id::text AS id, to_jsonb(credits) AS credits FROM users WHERE id = $1::text";

/// Repository for user row lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(FIND_USER_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Lookup, e.to_string(), e))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_user(&self, handle: &LookupHandle) -> AppResult<Option<UserRecord>> {
        let user_id = handle.user_id().as_str();
        let row = self.find_by_id(user_id).await?;
        debug!(user_id = %user_id, found = row.is_some(), "PostgreSQL user lookup");
        Ok(row)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
