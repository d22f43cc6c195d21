//! Customer API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Static route before /{id} to avoid path capture
        .route("/active", get(handler::list_active))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
