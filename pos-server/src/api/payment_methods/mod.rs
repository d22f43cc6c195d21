//! Payment Method API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/payment-methods", routes())
}

fn routes() -> Router<ServerState> {
    // Read routes: any authenticated user
    let read_routes = Router::new().route("/", get(handler::list));

    // Write routes: administrators only
    let write_routes = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(write_routes)
}
