//! Health check route
//!
//! | Path | Method | Auth |
//! |---------|--------|------|
//! | /health | GET | none |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Public router (no authentication)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
