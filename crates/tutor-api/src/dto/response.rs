//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Acknowledgement of a login or logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
}

impl SuccessResponse {
    /// The success acknowledgement.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Credit balance of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsResponse {
    /// Effective balance.
    pub credits: u64,
}

/// The authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Subject identifier.
    pub id: String,
    /// Email address, if the provider reports one.
    pub email: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Version.
    pub version: String,
}
