//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use tutor_core::error::{AppError, ErrorKind};

/// Body sent in place of the message of any non-public error.
pub const SERVER_ERROR: &str = "Server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Lookup | ErrorKind::ExternalService => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AppError> for ApiErrorResponse {
    fn from(err: AppError) -> Self {
        let error = if err.kind.is_public() {
            err.message
        } else {
            SERVER_ERROR.to_string()
        };
        Self { error }
    }
}

/// Wrapper so the foreign `AppError` can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if !err.kind.is_public() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
        }

        (status, Json(ApiErrorResponse::from(err))).into_response()
    }
}

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;
