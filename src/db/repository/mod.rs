//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. Record keys are sequential
//! integers allocated from the `counter` table, so ids stay stable and
//! wire-friendly across restarts.

// Catalog
pub mod product;

// Parties
pub mod organisation;

// Trades
pub mod order;

// Re-exports
pub use order::OrderRepository;
pub use organisation::OrganisationRepository;
pub use product::ProductRepository;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::db::models::snapshot::SnapshotDecodeError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Codec error: {0}")]
    Codec(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let message = err.to_string();
        // Unique index violations surface as "index ... already contains ..."
        if message.contains("already contains") {
            RepoError::Duplicate(message)
        } else {
            RepoError::Database(message)
        }
    }
}

impl From<SnapshotDecodeError> for RepoError {
    fn from(err: SnapshotDecodeError) -> Self {
        RepoError::Codec(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn get(&self, id: i64) -> RepoResult<Option<T>>;
    async fn get_multi(&self, skip: u64, limit: u64) -> RepoResult<Vec<T>>;
    async fn update(&self, id: i64, data: UpdateDto) -> RepoResult<T>;
    async fn remove(&self, id: i64) -> RepoResult<T>;
}

/// Base repository with database reference and shared CRUD plumbing
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Record pointer for an integer key, e.g. `products:42`
    pub fn record_id(table: &str, id: i64) -> RecordId {
        RecordId::from_table_key(table, id)
    }

    /// Allocate the next sequential id for a table
    pub async fn next_id(&self, table: &str) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct Counter {
            value: i64,
        }

        let counter = RecordId::from_table_key("counter", table);
        let mut result = self
            .db
            .query("UPSERT $counter SET value += 1 RETURN AFTER")
            .bind(("counter", counter))
            .await?;
        let row: Option<Counter> = result.take(0)?;
        row.map(|c| c.value)
            .ok_or_else(|| RepoError::Database(format!("counter for '{table}' returned no row")))
    }

    /// Insert a row under a freshly allocated id and return it
    pub async fn insert<T, C>(&self, table: &str, data: C) -> RepoResult<T>
    where
        T: DeserializeOwned,
        C: Serialize + Send + Sync + 'static,
    {
        let id = self.next_id(table).await?;
        let created: Option<T> = self
            .db
            .create(Self::record_id(table, id))
            .content(data)
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("failed to create {table}:{id}")))
    }

    pub async fn select_by_id<T>(&self, table: &str, id: i64) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let row: Option<T> = self.db.select(Self::record_id(table, id)).await?;
        Ok(row)
    }

    /// Page through a table in ascending id order
    pub async fn select_page<T>(&self, table: &str, skip: u64, limit: u64) -> RepoResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut result = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY id LIMIT $limit START $skip")
            .bind(("table", table.to_string()))
            .bind(("limit", limit))
            .bind(("skip", skip))
            .await?;
        Ok(result.take(0)?)
    }

    /// Merge the set fields of `data` onto a row and return the result
    ///
    /// Uses a raw MERGE query to avoid deserialization issues with null
    /// fields; the merged row is fetched afterwards.
    pub async fn merge_by_id<T, U>(&self, table: &str, id: i64, data: U) -> RepoResult<T>
    where
        T: DeserializeOwned,
        U: Serialize + Send + Sync + 'static,
    {
        let thing = Self::record_id(table, id);
        self.db
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing.clone()))
            .bind(("data", data))
            .await?
            .check()?;

        // UPDATE on a missing record is a no-op, so absence here means 404
        let updated: Option<T> = self.db.select(thing).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("{table}:{id} not found")))
    }

    /// Delete a row and return what was stored
    pub async fn delete_by_id<T>(&self, table: &str, id: i64) -> RepoResult<T>
    where
        T: DeserializeOwned,
    {
        let deleted: Option<T> = self.db.delete(Self::record_id(table, id)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("{table}:{id} not found")))
    }
}
