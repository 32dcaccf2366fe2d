//! # tutor-api
//!
//! HTTP API layer for AI Tutor built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging, timeouts),
//! the authenticated-user extractor, session cookie handling, DTOs, and
//! error mapping.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
