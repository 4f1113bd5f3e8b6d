//! Paired Device Model

use serde::{Deserialize, Serialize};

/// Role a paired device plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Customer-facing ordering screen
    #[default]
    Kiosk,
    /// Staff-facing order screen
    Orders,
    /// Management panel
    Manage,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Kiosk => "kiosk",
            DeviceType::Orders => "orders",
            DeviceType::Manage => "manage",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paired device record, stored on the admin account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: u32,
    pub name: String,
    /// SHA-512 hex digest of the device token
    pub token: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    #[serde(rename = "pairDate")]
    pub pair_date: i64,
}

/// Device record as returned to the management panel (no token hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    #[serde(rename = "pairDate")]
    pub pair_date: i64,
}

impl From<&DeviceInfo> for DeviceSummary {
    fn from(device: &DeviceInfo) -> Self {
        Self {
            id: device.id,
            name: device.name.clone(),
            device_type: device.device_type,
            pair_date: device.pair_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_wire_names() {
        assert_eq!(serde_json::to_string(&DeviceType::Orders).unwrap(), "\"orders\"");
        let t: DeviceType = serde_json::from_str("\"manage\"").unwrap();
        assert_eq!(t, DeviceType::Manage);
        assert_eq!(DeviceType::default(), DeviceType::Kiosk);
    }

    #[test]
    fn test_summary_hides_token() {
        let device = DeviceInfo {
            id: 3,
            name: "Front counter".into(),
            token: "abc".into(),
            device_type: DeviceType::Kiosk,
            pair_date: 1_700_000_000_000,
        };
        let json = serde_json::to_value(DeviceSummary::from(&device)).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(json["type"], "kiosk");
        assert_eq!(json["pairDate"], 1_700_000_000_000i64);
    }
}
