//! Password digests for locally held accounts.

pub mod digest;

pub use digest::PasswordDigest;
