//! Unified error handling
//!
//! Application-level error enum and its HTTP mapping:
//!
//! | Variant | Status |
//! |---------|--------|
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Validation | 422 |
//! | Database / Internal | 500 |
//!
//! Repository errors convert through [`From<RepoError>`], so handlers can
//! propagate persistence failures with `?` and get the right status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// Lookup by identifier yielded no row (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// Uniqueness invariant broken (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// Malformed or missing required input (422)
    Validation(String),

    #[error("Database error: {0}")]
    /// Persistence failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else that should not leak details (500)
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            AppError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Codec(msg) => AppError::Internal(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
