//! # tutor-service
//!
//! Business logic for AI Tutor. Services depend on the identity provider
//! and user store only through their traits, so every flow can be
//! exercised with in-memory backends.

pub mod auth;
pub mod context;
pub mod credits;
pub mod teacher;

pub use auth::AuthService;
pub use context::RequestContext;
pub use credits::CreditsService;
pub use teacher::TeacherCatalog;
