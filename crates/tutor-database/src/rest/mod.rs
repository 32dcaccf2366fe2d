//! PostgREST-compatible REST user store.

pub mod store;

pub use store::RestUserStore;
