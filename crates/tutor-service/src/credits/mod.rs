//! Credits ledger access.

pub mod policy;
pub mod service;

pub use policy::{DEFAULT_CREDITS, narrow_credits};
pub use service::CreditsService;
