//! # tutor-database
//!
//! User store abstraction and its backends: PostgreSQL through sqlx, a
//! PostgREST-compatible REST endpoint, and an in-memory map for development
//! and tests. [`UserStoreManager`] selects one from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod rest;
pub mod store;

pub use connection::lazy_pool;
pub use provider::UserStoreManager;
pub use store::UserStore;
