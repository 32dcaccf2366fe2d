//! User store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use tutor_core::config::DatabaseConfig;
use tutor_core::error::AppError;
use tutor_core::result::AppResult;
use tutor_core::types::LookupHandle;
use tutor_entity::user::UserRecord;

use crate::connection::lazy_pool;
use crate::memory::MemoryUserStore;
use crate::repositories::UserRepository;
use crate::rest::RestUserStore;
use crate::store::UserStore;

/// User store manager that wraps the configured backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct UserStoreManager {
    inner: Arc<dyn UserStore>,
}

impl UserStoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn UserStore> = match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL user store");
                let pool = lazy_pool(config)?;
                if config.run_migrations {
                    crate::migration::apply_pending(&pool).await?;
                }
                Arc::new(UserRepository::new(pool))
            }
            "rest" => {
                info!(url = %config.rest.url, table = %config.rest.table, "Initializing REST user store");
                Arc::new(RestUserStore::new(&config.rest)?)
            }
            "memory" => {
                info!(rows = config.memory_rows.len(), "Initializing in-memory user store");
                Arc::new(MemoryUserStore::from_seeds(&config.memory_rows))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown user store provider: '{other}'. Supported: postgres, rest, memory"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl UserStore for UserStoreManager {
    async fn find_user(&self, handle: &LookupHandle) -> AppResult<Option<UserRecord>> {
        self.inner.find_user(handle).await
    }

    fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}
