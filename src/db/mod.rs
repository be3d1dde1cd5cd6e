//! Database Module
//!
//! Embedded SurrealDB storage, schema bootstrap, models and repositories

pub mod models;
pub mod repository;
mod schema;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded database handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("trade")
            .use_db("trade")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        schema::apply(&db).await?;

        tracing::info!("Database connection established (SurrealDB RocksDB)");

        Ok(Self { db })
    }
}
