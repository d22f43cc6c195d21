//! Order API module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    // Authenticated user routes
    let user_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status));

    // Administrator routes. /history is registered as a static segment so
    // it never collides with the /{id} capture.
    let admin_routes = Router::new()
        .route("/history", get(handler::history))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    user_routes.merge(admin_routes)
}
