//! Local verification of provider-issued access tokens.

pub mod claims;
pub mod verifier;

pub use claims::AccessClaims;
pub use verifier::AccessTokenVerifier;
