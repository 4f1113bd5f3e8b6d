//! Admin Session Service
//!
//! `NoAccount -(signup)-> LoggedOut -(login)-> LoggedIn -(timeout | logout)-> LoggedOut`

use shared::models::{AdminAccount, AuthCredentials};
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::Identity;
use crate::auth::hashing::{new_session_token, sha512_hex};
use crate::db::repository::AdminRepository;
use crate::security_log;
use crate::utils::validation::validate_credentials;

#[derive(Clone)]
pub struct SessionService {
    admins: AdminRepository,
}

impl SessionService {
    pub fn new(admins: AdminRepository) -> Self {
        Self { admins }
    }

    /// Create the admin account. Only allowed once.
    pub async fn signup(&self, credentials: &AuthCredentials, now: i64) -> AppResult<()> {
        if self.admins.get().await?.is_some() {
            security_log!("WARN", "signup_rejected", username = credentials.username.as_str());
            return Err(AppError::new(ErrorCode::AdminAccountExists));
        }
        validate_credentials(credentials)?;

        self.admins
            .create(AdminAccount {
                admin_username: credentials.username.clone(),
                admin_password_hash: sha512_hex(&credentials.password),
                admin_last_login: now,
                admin_token: String::new(),
                connected_clients: Vec::new(),
            })
            .await?;

        tracing::info!(username = %credentials.username, "Admin account created");
        Ok(())
    }

    /// Verify credentials and start a new session, returning the raw token
    pub async fn login(&self, credentials: &AuthCredentials, now: i64) -> AppResult<String> {
        let Some(mut account) = self.admins.get().await? else {
            security_log!("WARN", "login_failed", reason = "no_account");
            return Err(AppError::invalid_credentials());
        };

        if account.admin_username != credentials.username
            || account.admin_password_hash != sha512_hex(&credentials.password)
        {
            security_log!(
                "WARN",
                "login_failed",
                reason = "mismatch",
                username = credentials.username.as_str()
            );
            return Err(AppError::invalid_credentials());
        }

        let token = new_session_token(now, &credentials.password);
        account.admin_token = sha512_hex(&token);
        account.admin_last_login = now;
        self.admins.save(account).await?;

        security_log!("INFO", "login_success", username = credentials.username.as_str());
        Ok(token)
    }

    /// End the caller's session. A no-op unless the session is valid.
    pub async fn logout(&self, identity: &Identity) -> AppResult<()> {
        if !identity.is_admin() {
            return Ok(());
        }
        if let Some(mut account) = self.admins.get().await? {
            account.admin_token.clear();
            let username = account.admin_username.clone();
            self.admins.save(account).await?;
            security_log!("INFO", "logout", username = username.as_str());
        }
        Ok(())
    }
}
