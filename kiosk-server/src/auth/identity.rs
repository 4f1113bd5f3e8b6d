//! Caller identity
//!
//! Resolved from the `token` and `device-token` cookies against the stored
//! admin account. An admin session counts as a `manage` device.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::models::{AdminAccount, DeviceInfo, DeviceType, SessionStatus};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::cookie::{DEVICE_COOKIE, SESSION_COOKIE, read_cookie};
use crate::auth::hashing::token_matches;
use crate::core::ServerState;
use crate::db::repository::AdminRepository;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub session: SessionStatus,
    /// Paired device matching the presented device token
    pub device: Option<DeviceInfo>,
}

/// Whether the presented session token is current
pub fn session_is_valid(
    account: &AdminAccount,
    token: Option<&str>,
    now: i64,
    timeout_secs: i64,
) -> bool {
    let Some(token) = token else {
        return false;
    };
    token_matches(token, &account.admin_token)
        && now - account.admin_last_login < timeout_secs * 1000
}

/// Paired device whose stored hash matches the presented token
pub fn find_device<'a>(account: &'a AdminAccount, token: Option<&str>) -> Option<&'a DeviceInfo> {
    let token = token?;
    account
        .connected_clients
        .iter()
        .find(|d| token_matches(token, &d.token))
}

impl Identity {
    pub fn resolve(
        account: Option<&AdminAccount>,
        session_token: Option<&str>,
        device_token: Option<&str>,
        now: i64,
        timeout_secs: i64,
    ) -> Self {
        let Some(account) = account else {
            return Self {
                session: SessionStatus {
                    has_admin_account: false,
                    authenticated: false,
                },
                device: None,
            };
        };

        Self {
            session: SessionStatus {
                has_admin_account: true,
                authenticated: session_is_valid(account, session_token, now, timeout_secs),
            },
            device: find_device(account, device_token).cloned(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.session.authenticated
    }

    /// Effective device role of the caller
    pub fn device_type(&self) -> Option<DeviceType> {
        if self.is_admin() {
            return Some(DeviceType::Manage);
        }
        self.device.as_ref().map(|d| d.device_type)
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::unauthorized())
        }
    }

    /// Require the caller to act as one of `allowed`
    pub fn require_device(&self, allowed: &[DeviceType]) -> AppResult<DeviceType> {
        match self.device_type() {
            Some(t) if allowed.contains(&t) => Ok(t),
            _ => Err(AppError::new(ErrorCode::DeviceNotPaired)),
        }
    }
}

impl FromRequestParts<ServerState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(identity.clone());
        }

        let account = AdminRepository::new(state.get_db()).get().await?;
        let identity = Identity::resolve(
            account.as_ref(),
            read_cookie(&parts.headers, SESSION_COOKIE),
            read_cookie(&parts.headers, DEVICE_COOKIE),
            now_millis(),
            state.config.session_timeout_secs,
        );

        parts.extensions.insert(identity.clone());
        Ok(identity)
    }
}
