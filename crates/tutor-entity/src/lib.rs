//! # tutor-entity
//!
//! Domain entity models for AI Tutor. User rows derive `sqlx::FromRow`;
//! sessions and identities are value objects handed back by the identity
//! provider; teachers form a fixed catalog.

pub mod session;
pub mod teacher;
pub mod user;
