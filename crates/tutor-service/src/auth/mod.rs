//! Identity gate and session flows.

pub mod service;

pub use service::{AuthService, MISSING_CREDENTIALS, UNAUTHORIZED};
