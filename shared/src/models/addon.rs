//! Addon Model

use serde::{Deserialize, Serialize};

/// Optional extra that can be attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub price: f64,
}
