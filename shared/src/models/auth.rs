//! Admin Account Model

use serde::{Deserialize, Serialize};

use super::device::DeviceInfo;

/// Username/password pair sent by signup and login
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthCredentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Singleton admin account record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub admin_username: String,
    /// SHA-512 hex digest of the password
    pub admin_password_hash: String,
    /// Unix millis of the last successful login (or signup)
    pub admin_last_login: i64,
    /// SHA-512 hex digest of the current session token, empty when logged out
    #[serde(default)]
    pub admin_token: String,
    #[serde(default)]
    pub connected_clients: Vec<DeviceInfo>,
}

/// Result of an admin session check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub has_admin_account: bool,
    pub authenticated: bool,
}
