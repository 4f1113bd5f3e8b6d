//! Device Pairing Service
//!
//! `Unpaired -(admin opens window)-> PairingOpen -(pair without token)-> Paired`
//!
//! The window closes on its own `pairing_timeout_secs` after the last open.
//! Device records live on the admin account; only token hashes are stored.

use shared::models::{DeviceInfo, DeviceSummary, DeviceType};
use shared::order::lowest_missing_value;
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::Identity;
use crate::auth::hashing::{new_device_token, sha512_hex};
use crate::db::repository::{AdminRepository, PairingRepository};
use crate::security_log;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Result of a pair request
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    /// Caller holds an admin session
    Admin,
    /// Caller already holds a token for the requested type
    Existing(DeviceSummary),
    /// A new device was registered; `token` goes into the device cookie
    Paired { device: DeviceSummary, token: String },
}

#[derive(Clone)]
pub struct PairingService {
    admins: AdminRepository,
    windows: PairingRepository,
    timeout_secs: i64,
}

impl PairingService {
    pub fn new(admins: AdminRepository, windows: PairingRepository, timeout_secs: i64) -> Self {
        Self {
            admins,
            windows,
            timeout_secs,
        }
    }

    /// Open or extend the pairing window, returning its expiry
    pub async fn open(&self, now: i64) -> AppResult<i64> {
        let window = self.windows.open(now + self.timeout_secs * 1000).await?;
        security_log!("INFO", "pairing_opened", expires_at = window.expires_at);
        Ok(window.expires_at)
    }

    pub async fn pair(
        &self,
        identity: &Identity,
        requested: Option<DeviceType>,
        now: i64,
    ) -> AppResult<PairOutcome> {
        if identity.is_admin() {
            return Ok(PairOutcome::Admin);
        }

        let requested = requested.unwrap_or_default();

        if let Some(device) = &identity.device {
            if device.device_type == requested {
                return Ok(PairOutcome::Existing(DeviceSummary::from(device)));
            }
            security_log!(
                "WARN",
                "device_type_mismatch",
                device_id = device.id,
                stored = device.device_type.as_str(),
                requested = requested.as_str()
            );
            return Err(AppError::new(ErrorCode::DeviceTypeMismatch));
        }

        let Some(mut account) = self.admins.get().await? else {
            return Err(AppError::new(ErrorCode::AdminAccountMissing));
        };

        if !self.windows.is_open(now).await? {
            security_log!("WARN", "pairing_closed", requested = requested.as_str());
            return Err(AppError::new(ErrorCode::PairingClosed));
        }

        let ids: Vec<u32> = account.connected_clients.iter().map(|d| d.id).collect();
        let id = lowest_missing_value(&ids);
        let token = new_device_token(now, id);

        let device = DeviceInfo {
            id,
            name: format!("New {requested} screen"),
            token: sha512_hex(&token),
            device_type: requested,
            pair_date: now,
        };
        let summary = DeviceSummary::from(&device);
        account.connected_clients.push(device);
        self.admins.save(account).await?;

        security_log!(
            "INFO",
            "device_paired",
            device_id = id,
            device_type = requested.as_str()
        );
        Ok(PairOutcome::Paired {
            device: summary,
            token,
        })
    }

    /// Paired devices, without token hashes
    pub async fn list(&self) -> AppResult<Vec<DeviceSummary>> {
        let account = self.account().await?;
        Ok(account.connected_clients.iter().map(DeviceSummary::from).collect())
    }

    pub async fn delete(&self, device_id: u32) -> AppResult<()> {
        let mut account = self.account().await?;
        let before = account.connected_clients.len();
        account.connected_clients.retain(|d| d.id != device_id);
        if account.connected_clients.len() == before {
            return Err(AppError::new(ErrorCode::DeviceNotFound).with_detail("deviceID", device_id));
        }
        self.admins.save(account).await?;

        security_log!("INFO", "device_removed", device_id = device_id);
        Ok(())
    }

    pub async fn rename(&self, device_id: u32, new_name: &str) -> AppResult<()> {
        validate_required_text(new_name, "newName", MAX_NAME_LEN)?;

        let mut account = self.account().await?;
        let device = account
            .connected_clients
            .iter_mut()
            .find(|d| d.id == device_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::DeviceNotFound).with_detail("deviceID", device_id)
            })?;
        device.name = new_name.trim().to_string();
        self.admins.save(account).await?;
        Ok(())
    }

    async fn account(&self) -> AppResult<shared::models::AdminAccount> {
        self.admins
            .get()
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::AdminAccountMissing))
    }
}
