//! Utility module - shared error types and logging
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler result alias

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
