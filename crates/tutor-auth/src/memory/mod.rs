//! In-process identity provider.

pub mod provider;

pub use provider::MemoryIdentityProvider;
