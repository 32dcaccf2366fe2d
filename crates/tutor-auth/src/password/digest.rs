//! Argon2id digests in PHC string form.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};

use tutor_core::error::AppError;
use tutor_core::result::AppResult;

/// Salted Argon2id digest of an account password.
///
/// The plaintext never outlives [`PasswordDigest::create`]. `Debug` output
/// omits the digest itself.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digests `password` under a fresh random salt.
    pub fn create(password: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Could not digest password: {e}")))?;
        Ok(Self(phc.to_string()))
    }

    /// Whether `candidate` is the password this digest was created from.
    pub fn matches(&self, candidate: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&self.0)
            .map_err(|e| AppError::internal(format!("Stored digest is unreadable: {e}")))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!("Digest comparison failed: {e}"))),
        }
    }

    /// PHC string, e.g. `$argon2id$v=19$...`.
    pub fn as_phc(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
