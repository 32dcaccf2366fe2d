//! # tutor-auth
//!
//! Identity delegation for AI Tutor.
//!
//! ## Modules
//!
//! - `provider`: the [`IdentityProvider`] trait the rest of the system depends on
//! - `gotrue`: HTTP client for a GoTrue-compatible hosted identity service
//! - `jwt`: local verification of provider-issued access tokens
//! - `memory`: in-process provider for development and tests
//! - `password`: Argon2id hashing used by the in-memory provider
//! - `manager`: configuration-driven provider selection

pub mod gotrue;
pub mod jwt;
pub mod manager;
pub mod memory;
pub mod password;
pub mod provider;

pub use gotrue::GoTrueProvider;
pub use jwt::AccessTokenVerifier;
pub use manager::IdentityManager;
pub use memory::MemoryIdentityProvider;
pub use password::PasswordDigest;
pub use provider::IdentityProvider;
