//! Teacher entry shown on the explore page.

use serde::{Deserialize, Serialize};

/// A tutor persona listed on the explore page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Catalog identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Short description of what the teacher covers.
    pub description: String,
}
