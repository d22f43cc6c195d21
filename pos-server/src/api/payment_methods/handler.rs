//! Payment Method API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::payment_method;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use shared::models::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};

/// GET /api/payment-methods - active payment methods
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PaymentMethod>>> {
    let methods = payment_method::find_active(&state.pool).await?;
    Ok(Json(methods))
}

/// POST /api/payment-methods
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentMethodCreate>,
) -> AppResult<Json<PaymentMethod>> {
    validate_required_text(
        &payload.payment_method_code,
        "payment_method_code",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

    let created = payment_method::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/payment-methods/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentMethodUpdate>,
) -> AppResult<Json<PaymentMethod>> {
    if let Some(code) = &payload.payment_method_code {
        validate_required_text(code, "payment_method_code", MAX_SHORT_TEXT_LEN)?;
    }
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;

    let updated = payment_method::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/payment-methods/:id (soft delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = payment_method::delete(&state.pool, id).await?;
    Ok(Json(result))
}
