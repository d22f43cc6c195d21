//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role checks.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Routes that never require authentication.
fn is_public_api_route(path: &str) -> bool {
    path == "/api/auth/login" || path == "/api/auth/register"
}

/// Authentication middleware - requires a logged-in user.
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into request extensions.
///
/// Skipped for:
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths (health check, 404s)
/// - `/api/auth/login`, `/api/auth/register`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_api_route(path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "Missing authorization header");
            return Err(AppError::unauthorized());
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from_claims(&claims)
                .ok_or_else(|| AppError::invalid_token("Malformed token subject"))?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "Authentication failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// Administrator middleware - requires `role == admin`.
///
/// Must run after [`require_auth`] so [`CurrentUser`] is present.
/// Non-admins receive 403 before any handler or query runs.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        tracing::warn!(
            target: "security",
            user_id = user.id,
            username = %user.username,
            "Admin privilege required"
        );
        return Err(AppError::forbidden("Administrator privilege required"));
    }

    Ok(next.run(req).await)
}
