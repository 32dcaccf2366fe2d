//! Convenience result type alias for AI Tutor.

use crate::error::AppError;

/// A specialized `Result` type for AI Tutor operations.
pub type AppResult<T> = Result<T, AppError>;
