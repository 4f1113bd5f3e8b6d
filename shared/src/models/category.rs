//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category, groups items for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Record id, assigned by the server on insert
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
