//! Order Model

use serde::{Deserialize, Serialize};

/// One line item within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPart {
    /// Unique within the order, lowest free integer >= 1
    #[serde(rename = "partID")]
    pub part_id: u32,
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub quantity: u32,
    /// One entry per addon instance, repeats allowed
    #[serde(rename = "addonIDs", default)]
    pub addon_ids: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl OrderPart {
    /// Create a part without an assigned id
    pub fn new(item_id: impl Into<String>, quantity: u32, addon_ids: Vec<String>) -> Self {
        Self {
            part_id: 0,
            item_id: item_id.into(),
            quantity,
            addon_ids,
            notes: String::new(),
        }
    }
}

/// Partial update for an order part, `partID` cannot be changed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartPatch {
    #[serde(rename = "itemID", default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(rename = "addonIDs", default, skip_serializing_if = "Option::is_none")]
    pub addon_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Customer details merged into an order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    /// Submission time (Unix millis), stamped by the server
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub parts: Vec<OrderPart>,
}
