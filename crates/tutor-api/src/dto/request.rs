//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
///
/// Absent and `null` fields both deserialize as `None` so that they fail
/// validation instead of JSON parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[serde(default)]
    #[validate(required, length(min = 1, message = "Email is required"))]
    pub email: Option<String>,
    /// Password.
    #[serde(default)]
    #[validate(required, length(min = 1, message = "Password is required"))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Email and password, when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.validate().ok()?;
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}
