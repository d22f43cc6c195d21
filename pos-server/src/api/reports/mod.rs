//! Report API module (admin only)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/overview", get(handler::overview))
        .route("/product-revenue", get(handler::product_revenue))
        .route("/daily-revenue", get(handler::daily_revenue))
        .route("/monthly-revenue", get(handler::monthly_revenue))
        .layer(middleware::from_fn(require_admin))
}
