//! Authentication Handlers
//!
//! Login, registration and current-user lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{UserCreate, UserInfo, UserRole};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let found = user::find_by_username(&state.pool, &req.username).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let account = match found {
        Some(account) => {
            if !account.is_active {
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = password::verify_password(&req.password, &account.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(username = %req.username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            account
        }
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .jwt_service
        .generate_token(account.id, &account.username, account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    let login_at = shared::util::now_millis();
    user::update_last_login(&state.pool, account.id, login_at).await?;

    tracing::info!(
        user_id = account.id,
        username = %account.username,
        role = account.role,
        "User logged in"
    );

    let mut user_info = UserInfo::from(account);
    user_info.last_login = Some(login_at);

    Ok(Json(LoginResponse {
        token,
        user: user_info,
    }))
}

/// POST /api/auth/register
///
/// New accounts always start as sellers; promoting to administrator is a
/// deployment concern (ADMIN_* bootstrap), not an API one.
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<UserInfo>> {
    validate_required_text(&payload.username, "username", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.password, "password", MAX_PASSWORD_LEN)?;
    if !payload.email.contains('@') {
        return Err(AppError::validation("email is not a valid address"));
    }

    let password_hash = password::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let created = user::create(
        &state.pool,
        payload.username.trim(),
        payload.email.trim(),
        &password_hash,
        UserRole::Seller,
    )
    .await?;

    tracing::info!(user_id = created.id, username = %created.username, "User registered");

    Ok(Json(UserInfo::from(created)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<UserInfo>> {
    let account = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", current_user.id)))?;
    Ok(Json(UserInfo::from(account)))
}
