//! User row as read from the user store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the users table.
///
/// `credits` is kept as raw JSON: the stored column may be null, missing,
/// or hold a value of the wrong type, and interpreting it is the job of
/// the credits service rather than the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    /// Subject identifier (primary key).
    pub id: String,
    /// Stored credits value, uninterpreted.
    #[serde(default)]
    pub credits: Option<serde_json::Value>,
}

impl UserRecord {
    /// Creates a record with the given raw credits value.
    pub fn new(id: impl Into<String>, credits: Option<serde_json::Value>) -> Self {
        Self {
            id: id.into(),
            credits,
        }
    }
}
