//! Settings Model

use serde::{Deserialize, Serialize};

/// Singleton menu settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Tax rate as a percentage (`8.25` means 8.25 %)
    #[serde(rename = "taxRate", default)]
    pub tax_rate: f64,
}
