//! Route handlers organized by domain.

pub mod auth;
pub mod credits;
pub mod health;
pub mod teachers;
