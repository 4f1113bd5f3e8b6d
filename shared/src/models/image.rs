//! Image Model

use serde::{Deserialize, Serialize};

/// Stored item image (JPEG, base64 encoded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub created_at: i64,
}
