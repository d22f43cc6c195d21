//! Server Implementation
//!
//! Router assembly and HTTP server startup.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::{Config, ServerState};
use crate::utils::AppResult;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        // Data model APIs
        .merge(crate::api::categories::router())
        .merge(crate::api::products::router())
        .merge(crate::api::customers::router())
        .merge(crate::api::payment_methods::router())
        .merge(crate::api::orders::router())
        // Reporting APIs
        .merge(crate::api::reports::router())
}

/// Build the complete service with state, authentication and HTTP
/// middleware applied. Used by [`Server::run`] and by integration tests
/// driving the router directly.
pub fn build_router(state: ServerState) -> Router {
    build_app()
        // JWT auth middleware at router level; require_auth skips public routes
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests, embedding)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> AppResult<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("Coffee POS server starting on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::utils::AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| crate::utils::AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}
