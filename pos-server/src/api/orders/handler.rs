//! Order API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use chrono::TimeZone;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{order, report};
use crate::reports::DateFilter;
use crate::utils::time::business_now;
use crate::utils::{AppError, AppResult};
use shared::models::{OrderCreate, OrderHistoryEntry, OrderResponse, OrderStatus, OrderStatusUpdate};
use shared::util::cents_to_amount;

/// POST /api/orders - create an order for the current user
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<OrderResponse>> {
    let created = order::create(&state.pool, current_user.id, &payload).await?;
    let items = order::find_items(&state.pool, created.id).await?;

    tracing::info!(
        order_id = created.id,
        user_id = current_user.id,
        total_cents = created.total_cents,
        "Order created"
    );

    Ok(Json(OrderResponse::from_order(created, items)))
}

/// GET /api/orders - current user's orders with items
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = order::find_by_user_with_items(&state.pool, current_user.id).await?;
    Ok(Json(
        orders
            .into_iter()
            .map(|(order, items)| OrderResponse::from_order(order, items))
            .collect(),
    ))
}

/// GET /api/orders/:id - one of the current user's orders
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderResponse>> {
    let found = order::find_by_id_for_user(&state.pool, id, current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    let items = order::find_items(&state.pool, found.id).await?;
    Ok(Json(OrderResponse::from_order(found, items)))
}

/// PUT /api/orders/:id/status
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<OrderResponse>> {
    let status = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::validation(format!("Invalid status: {}", payload.status)))?;

    let updated = order::update_status(&state.pool, id, current_user.id, status).await?;
    let items = order::find_items(&state.pool, updated.id).await?;
    Ok(Json(OrderResponse::from_order(updated, items)))
}

/// DELETE /api/orders/:id - delete an order and its items (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = order::delete(&state.pool, id).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub date_filter: String,
}

/// GET /api/orders/history?date_filter=... - order history report (admin)
///
/// Rejects unknown filter keywords before any query runs.
pub async fn history(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<OrderHistoryEntry>>> {
    let filter = DateFilter::parse(&query.date_filter).ok_or_else(|| {
        AppError::validation(format!("Invalid date filter: {}", query.date_filter))
    })?;

    let tz = state.config.timezone;
    let now = business_now(tz);
    let window = filter.window(now.date_naive());

    let rows = report::order_history(
        &state.pool,
        window.start_millis(tz),
        window.end_millis(tz),
    )
    .await?;

    let entries = rows
        .into_iter()
        .map(|row| OrderHistoryEntry {
            id: row.id,
            order_date: format_order_date(row.created_at, tz),
            total_quantity: row.total_quantity,
            total_amount: cents_to_amount(row.total_cents),
            customer_name: row.customer_name,
            payment_method_name: row.payment_method_name,
        })
        .collect();

    Ok(Json(entries))
}

fn format_order_date(millis: i64, tz: chrono_tz::Tz) -> String {
    chrono::Utc
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.with_timezone(&tz).to_rfc3339())
        .unwrap_or_default()
}
