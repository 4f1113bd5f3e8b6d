//! Intent module - request bodies for the intent-dispatched endpoints
//!
//! Every endpoint accepts a single JSON object tagged by `intent`:
//!
//! ```json
//! { "intent": "rename", "deviceID": 2, "newName": "Front kiosk" }
//! ```
//!
//! Each enum below is matched exhaustively by its handler.

use serde::{Deserialize, Serialize};

use crate::models::{AuthCredentials, DeviceType, MenuObject, MenuObjectType, Order, Settings};
use crate::report::Timeframe;

/// `POST /api/auth`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum AuthRequest {
    Signup { credentials: AuthCredentials },
    Login { credentials: AuthCredentials },
    Query,
    Logout,
}

/// `POST /api/device`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum DeviceRequest {
    Pair {
        #[serde(rename = "deviceType", default, skip_serializing_if = "Option::is_none")]
        device_type: Option<DeviceType>,
    },
    Open,
    Query,
    Delete {
        #[serde(rename = "deviceID")]
        device_id: u32,
    },
    Rename {
        #[serde(rename = "deviceID")]
        device_id: u32,
        #[serde(rename = "newName")]
        new_name: String,
    },
}

/// `POST /api/menu`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum MenuRequest {
    Get,
    Add {
        object: MenuObject,
    },
    Remove {
        #[serde(rename = "type")]
        object_type: MenuObjectType,
        id: String,
    },
    Modify {
        id: String,
        #[serde(rename = "modifiedObject")]
        modified_object: MenuObject,
    },
    GetSettings,
    ModifySettings {
        settings: Settings,
    },
}

/// `POST /api/order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum OrderRequest {
    Get,
    GetAll,
    Add { order: Order },
    Remove { id: String },
    Closeout { id: String },
}

/// `POST /api/report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum ReportRequest {
    Items {
        #[serde(default)]
        timeframe: Timeframe,
    },
    ItemsCsv {
        #[serde(default)]
        timeframe: Timeframe,
    },
    Hourly {
        /// Unix millis of the start of the day
        #[serde(rename = "dayStart")]
        day_start: i64,
    },
    Weekly {
        /// Unix millis of the start of the week
        #[serde(rename = "weekStart")]
        week_start: i64,
    },
}
