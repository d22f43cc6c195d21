//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// GET /api/categories - list active categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let found = category::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id}")))?;
    Ok(Json(found))
}

/// POST /api/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let created = category::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let updated = category::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/categories/:id (soft delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = category::delete(&state.pool, id).await?;
    Ok(Json(result))
}
