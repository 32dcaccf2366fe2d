//! # tutor-core
//!
//! Core crate for AI Tutor. Contains configuration schemas, typed
//! identifiers, the request-scoped lookup handle, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other AI Tutor crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
