//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::customer;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

fn validate_payload(
    phone: &Option<String>,
    address: &Option<String>,
    city: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(address, "address", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(city, "city", MAX_NAME_LEN)?;
    Ok(())
}

/// GET /api/customers - all customers ordered by sort_order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/customers/active - active customers only
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer::find_active(&state.pool).await?;
    Ok(Json(customers))
}

/// POST /api/customers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_payload(&payload.phone, &payload.address, &payload.city)?;

    let created = customer::create(&state.pool, payload).await?;
    Ok(Json(created))
}

/// PUT /api/customers/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    if let Some(name) = &payload.customer_name {
        validate_required_text(name, "customer_name", MAX_NAME_LEN)?;
    }
    validate_payload(&payload.phone, &payload.address, &payload.city)?;

    let updated = customer::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/customers/:id (soft delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = customer::delete(&state.pool, id).await?;
    Ok(Json(result))
}
