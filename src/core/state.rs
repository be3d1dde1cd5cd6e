use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state handed to every request handler
///
/// Holds the configuration and the embedded database handle. `Surreal<Db>`
/// is internally reference-counted, so cloning the state is cheap.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state
    ///
    /// Ensures the work directory exists, opens the database under
    /// `<work_dir>/database/trade.db` and applies the schema.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::Internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("trade.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// Get a handle to the database
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
