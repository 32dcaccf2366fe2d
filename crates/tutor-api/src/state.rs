//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tutor_auth::IdentityProvider;
use tutor_core::config::AppConfig;
use tutor_database::UserStore;
use tutor_service::{AuthService, CreditsService, TeacherCatalog};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Identity gate and session flows
    pub auth_service: Arc<AuthService>,
    /// Credits ledger access
    pub credits_service: Arc<CreditsService>,
    /// Explore-page catalog
    pub teacher_catalog: Arc<TeacherCatalog>,
}

impl AppState {
    /// Wires the services on top of the given backends.
    pub fn new(
        config: AppConfig,
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            auth_service: Arc::new(AuthService::new(identity)),
            credits_service: Arc::new(CreditsService::new(store)),
            teacher_catalog: Arc::new(TeacherCatalog::new()),
        }
    }
}
