//! Claims carried by provider-issued access tokens.

use serde::{Deserialize, Serialize};

/// Audience the provider stamps on tokens of signed-in users.
pub const AUTHENTICATED_AUDIENCE: &str = "authenticated";

/// Subset of access-token claims the service reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject, i.e. the user id.
    pub sub: String,
    /// Email of the signed-in user.
    #[serde(default)]
    pub email: Option<String>,
    /// Audience.
    pub aud: String,
    /// Expiry (seconds since epoch).
    pub exp: i64,
    /// Database role the token maps to.
    #[serde(default)]
    pub role: Option<String>,
}
