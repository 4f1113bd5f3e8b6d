//! Settings Repository
//!
//! Singleton record, defaults are returned until the first save.

use shared::models::Settings;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "MenuSettings";
const KEY: &str = "settings";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn get(&self) -> RepoResult<Settings> {
        let settings: Option<Settings> = self.base.db().select((TABLE, KEY)).await?;
        Ok(settings.unwrap_or_default())
    }

    pub async fn save(&self, settings: Settings) -> RepoResult<Settings> {
        let saved: Option<Settings> = self
            .base
            .db()
            .upsert((TABLE, KEY))
            .content(settings)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save settings".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn test_settings_default_then_saved() {
        let db = DbService::memory().await.unwrap().db;
        let repo = SettingsRepository::new(db);

        assert_eq!(repo.get().await.unwrap(), Settings::default());

        repo.save(Settings { tax_rate: 8.25 }).await.unwrap();
        repo.save(Settings { tax_rate: 9.5 }).await.unwrap();
        assert_eq!(repo.get().await.unwrap().tax_rate, 9.5);
    }
}
