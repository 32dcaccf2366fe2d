//! In-memory user store.

pub mod store;

pub use store::MemoryUserStore;
