//! Client for a GoTrue-compatible hosted identity service.

pub mod client;
pub mod types;

pub use client::GoTrueProvider;
