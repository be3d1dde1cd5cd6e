//! API Route Module
//!
//! # Structure
//!
//! - [`ping`] - liveness probe
//! - [`products`] - product catalog endpoints
//! - [`organisations`] - trading party endpoints
//! - [`orders`] - order endpoints, including the creation workflow
//!
//! Each resource module exposes a `router()` that nests its routes under
//! `/api/<resource>`; [`router`] merges them into the final application.

pub mod orders;
pub mod organisations;
pub mod ping;
pub mod products;

use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Pagination query parameters shared by the list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Build the full application router
pub fn router(state: ServerState) -> Router {
    Router::<ServerState>::new()
        .merge(ping::router())
        .merge(products::router())
        .merge(organisations::router())
        .merge(orders::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
