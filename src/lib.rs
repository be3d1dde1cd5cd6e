//! Trade Server - CRUD backend for produce trading
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): RESTful routes for products, organisations and orders
//! - **Database** (`db`): embedded SurrealDB storage, models and repositories
//! - **Core** (`core`): configuration, shared state, server bootstrap
//! - **Utils** (`utils`): error types and logging
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models, repositories, schema
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: load `.env` and initialize logging.
///
/// Call once before anything that emits tracing events.
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
  ______               __
 /_  __/________ _____/ /__
  / / / ___/ __ `/ __  / _ \
 / / / /  / /_/ / /_/ /  __/
/_/ /_/   \__,_/\__,_/\___/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
