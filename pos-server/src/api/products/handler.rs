//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::product::{ProductInsert, ProductPatch};
use crate::db::repository::{category, product};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{ProductCreate, ProductResponse, ProductUpdate};
use shared::util::amount_to_cents;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category_id: Option<i64>,
}

fn price_to_cents(price: f64) -> AppResult<i64> {
    let cents =
        amount_to_cents(price).ok_or_else(|| AppError::validation("price is not a valid amount"))?;
    if cents < 0 {
        return Err(AppError::validation("price must not be negative"));
    }
    Ok(cents)
}

/// GET /api/products - list active products, optionally by category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = product::find_all(&state.pool, query.category_id).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductResponse>> {
    let found = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
    Ok(Json(ProductResponse::from(found)))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ProductResponse>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    let price_cents = price_to_cents(payload.price)?;

    let cat = category::find_by_id(&state.pool, payload.category_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {}", payload.category_id)))?;
    if !cat.is_active {
        return Err(AppError::validation(format!(
            "Category {} is inactive",
            payload.category_id
        )));
    }

    let created = product::create(
        &state.pool,
        ProductInsert {
            name: payload.name,
            description: payload.description,
            price_cents,
            category_id: payload.category_id,
            image_url: payload.image_url,
        },
    )
    .await?;
    Ok(Json(ProductResponse::from(created)))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<ProductResponse>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;

    let price_cents = match payload.price {
        Some(price) => Some(price_to_cents(price)?),
        None => None,
    };

    if let Some(category_id) = payload.category_id {
        category::find_by_id(&state.pool, category_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {category_id}")))?;
    }

    let updated = product::update(
        &state.pool,
        id,
        ProductPatch {
            name: payload.name,
            description: payload.description,
            price_cents,
            category_id: payload.category_id,
            image_url: payload.image_url,
            is_active: payload.is_active,
        },
    )
    .await?;
    Ok(Json(ProductResponse::from(updated)))
}

/// DELETE /api/products/:id (soft delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = product::delete(&state.pool, id).await?;
    Ok(Json(result))
}
