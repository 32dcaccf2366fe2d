//! HMAC access-token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use tutor_core::types::UserId;
use tutor_entity::session::Identity;

use super::claims::{AUTHENTICATED_AUDIENCE, AccessClaims};

/// Verifies access tokens against the provider's shared signing secret,
/// avoiding a network round-trip per request.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenVerifier {
    /// Creates a verifier for HS256 tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew
        validation.set_audience(&[AUTHENTICATED_AUDIENCE]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Returns the identity for a valid token, `None` otherwise.
    pub fn verify(&self, token: &str) -> Option<Identity> {
        let claims = match decode::<AccessClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(reason = %e, "Access token rejected");
                return None;
            }
        };

        let user_id = UserId::parse(claims.sub)?;
        Some(Identity {
            user_id,
            email: claims.email,
        })
    }
}
