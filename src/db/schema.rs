//! Table and index definitions
//!
//! Applied at startup; every statement is idempotent (`IF NOT EXISTS`).
//! Field names match the wire format, so a single model type serves both
//! the database and the API. Uniqueness invariants live here:
//! `products(Category, Variety, Packaging)` and `organisations(Name)`.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::utils::AppError;

const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS products SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS Category ON products TYPE string;
DEFINE FIELD IF NOT EXISTS Variety ON products TYPE string;
DEFINE FIELD IF NOT EXISTS Packaging ON products TYPE string;
DEFINE INDEX IF NOT EXISTS product_identity ON products FIELDS Category, Variety, Packaging UNIQUE;

DEFINE TABLE IF NOT EXISTS organisations SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS Name ON organisations TYPE string;
DEFINE FIELD IF NOT EXISTS Type ON organisations TYPE option<string>;
DEFINE INDEX IF NOT EXISTS organisation_name ON organisations FIELDS Name UNIQUE;

DEFINE TABLE IF NOT EXISTS orders SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS Type ON orders TYPE string;
DEFINE FIELD IF NOT EXISTS References ON orders TYPE option<int>;
DEFINE FIELD IF NOT EXISTS Products ON orders TYPE array<string>;
DEFINE FIELD IF NOT EXISTS Organisation_id ON orders TYPE int;

DEFINE TABLE IF NOT EXISTS counter SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS value ON counter TYPE int DEFAULT 0;
"#;

/// Apply the schema, surfacing the first failed statement
pub async fn apply(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Schema statement rejected: {e}")))?;

    tracing::info!("Database schema applied");
    Ok(())
}
