//! Pairing Window Repository
//!
//! The window is a single row holding its expiry, so every request sees the
//! same state regardless of which process serves it.

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "pairing";
const KEY: &str = "window";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingWindow {
    /// Unix millis after which pairing is closed
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl PairingWindow {
    pub fn is_open(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

#[derive(Clone)]
pub struct PairingRepository {
    base: BaseRepository,
}

impl PairingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn get(&self) -> RepoResult<Option<PairingWindow>> {
        let window: Option<PairingWindow> = self.base.db().select((TABLE, KEY)).await?;
        Ok(window)
    }

    /// Open (or extend) the window until `expires_at`
    pub async fn open(&self, expires_at: i64) -> RepoResult<PairingWindow> {
        let saved: Option<PairingWindow> = self
            .base
            .db()
            .upsert((TABLE, KEY))
            .content(PairingWindow { expires_at })
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to open pairing window".to_string()))
    }

    pub async fn is_open(&self, now: i64) -> RepoResult<bool> {
        Ok(self.get().await?.is_some_and(|w| w.is_open(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[test]
    fn test_window_expiry_is_exclusive() {
        let window = PairingWindow { expires_at: 1_000 };
        assert!(window.is_open(999));
        assert!(!window.is_open(1_000));
    }

    #[tokio::test]
    async fn test_open_and_reopen() {
        let db = DbService::memory().await.unwrap().db;
        let repo = PairingRepository::new(db);

        assert!(!repo.is_open(0).await.unwrap());
        repo.open(30_000).await.unwrap();
        assert!(repo.is_open(29_999).await.unwrap());
        assert!(!repo.is_open(30_000).await.unwrap());

        repo.open(60_000).await.unwrap();
        assert!(repo.is_open(45_000).await.unwrap());
    }
}
