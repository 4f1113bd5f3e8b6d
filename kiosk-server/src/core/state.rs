use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{PairingService, SessionService};
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{AdminRepository, OrderRepository, PairingRepository};
use crate::services::{ImagePipeline, MenuService};

/// Server state - cloned into every handler
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | Surreal<Db> | Embedded database handle |
///
/// The database handle is reference counted, so cloning is cheap. Services
/// are built per request from these two fields.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Open the on-disk database under the work directory
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_path();
        let db_path = db_path.to_str().ok_or_else(|| {
            ServerError::Config(format!("Database path is not UTF-8: {}", db_path.display()))
        })?;

        let db_service = DbService::new(db_path)
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// State backed by an in-memory database
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db_service = DbService::memory()
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;
        Ok(Self::new(config, db_service.db))
    }

    /// Get the database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn image_pipeline(&self) -> ImagePipeline {
        ImagePipeline::new(
            self.config.max_image_bytes,
            self.config.image_max_dimension,
            self.config.jpeg_quality,
        )
    }

    pub fn menu_service(&self) -> MenuService {
        MenuService::new(self.get_db(), self.image_pipeline())
    }

    pub fn session_service(&self) -> SessionService {
        SessionService::new(AdminRepository::new(self.get_db()))
    }

    pub fn pairing_service(&self) -> PairingService {
        PairingService::new(
            AdminRepository::new(self.get_db()),
            PairingRepository::new(self.get_db()),
            self.config.pairing_timeout_secs,
        )
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.get_db())
    }
}
