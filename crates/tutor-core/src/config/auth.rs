//! Identity provider and session cookie configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Identity provider backend: `"gotrue"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the identity provider (e.g. `https://project.example.co`).
    #[serde(default)]
    pub url: String,
    /// Public API key sent as the `apikey` header.
    #[serde(default)]
    pub api_key: String,
    /// HMAC secret used to verify access tokens locally. When unset, every
    /// session is validated with a round-trip to the provider.
    ///
    /// Local verification never consults the provider, so a token revoked by
    /// logout keeps passing the identity gate until its `exp` claim elapses.
    /// Leave unset when logout must take effect immediately.
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Timeout applied to every provider call, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Session cookie settings.
    #[serde(default)]
    pub session_cookie: SessionCookieConfig,
    /// Accounts known to the in-memory provider.
    #[serde(default)]
    pub memory_users: Vec<MemoryUserSeed>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            url: String::new(),
            api_key: String::new(),
            jwt_secret: None,
            timeout_seconds: default_timeout(),
            session_cookie: SessionCookieConfig::default(),
            memory_users: Vec::new(),
        }
    }
}

/// Session cookie attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCookieConfig {
    /// Cookie name carrying the access token.
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Whether to mark the cookie `Secure`.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// Cookie lifetime in seconds when the provider gives no expiry.
    #[serde(default = "default_cookie_max_age")]
    pub max_age_seconds: i64,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            secure: default_true(),
            max_age_seconds: default_cookie_max_age(),
        }
    }
}

/// An account seeded into the in-memory identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryUserSeed {
    /// Stable user identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Plaintext password, hashed at startup.
    pub password: String,
}

fn default_provider() -> String {
    "gotrue".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_cookie_name() -> String {
    "tutor-session".to_string()
}

fn default_true() -> bool {
    true
}

fn default_cookie_max_age() -> i64 {
    3600
}
