//! Teacher catalog entities.

pub mod model;

pub use model::Teacher;
