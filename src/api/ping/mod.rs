//! Ping API Module
//!
//! Liveness probe that also reports which environment the server runs in.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ping: &'static str,
    pub environment: String,
    pub testing: bool,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/ping", get(ping))
}

/// GET /ping
async fn ping(State(state): State<ServerState>) -> Json<PingResponse> {
    Json(PingResponse {
        ping: "Yatta!",
        environment: state.config.environment.clone(),
        testing: state.config.testing,
    })
}
