//! Core type definitions used across the AI Tutor workspace.

pub mod handle;
pub mod id;

pub use handle::LookupHandle;
pub use id::UserId;
