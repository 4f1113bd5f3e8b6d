//! Item Model

use serde::{Deserialize, Serialize};

/// Menu item
///
/// Categories and addons are referenced by id. The image lives in its own
/// collection and is referenced through `imageID`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(rename = "imageID", default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(rename = "categoryIDs", default)]
    pub category_ids: Vec<String>,
    #[serde(rename = "addonIDs", default)]
    pub addon_ids: Vec<String>,
}
