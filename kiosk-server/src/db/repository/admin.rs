//! Admin Account Repository
//!
//! The single admin account, including its paired devices.

use shared::models::AdminAccount;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "auth";
const KEY: &str = "admin";

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn get(&self) -> RepoResult<Option<AdminAccount>> {
        let account: Option<AdminAccount> = self.base.db().select((TABLE, KEY)).await?;
        Ok(account)
    }

    /// Create the account. Fails if one already exists.
    pub async fn create(&self, account: AdminAccount) -> RepoResult<AdminAccount> {
        let created: Option<AdminAccount> = self
            .base
            .db()
            .create((TABLE, KEY))
            .content(account)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin account".to_string()))
    }

    /// Overwrite the stored account
    pub async fn save(&self, account: AdminAccount) -> RepoResult<AdminAccount> {
        let saved: Option<AdminAccount> = self
            .base
            .db()
            .upsert((TABLE, KEY))
            .content(account)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save admin account".to_string()))
    }
}
