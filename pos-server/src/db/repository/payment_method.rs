//! Payment Method Repository

use shared::models::{PaymentMethod, PaymentMethodCreate, PaymentMethodUpdate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const PAYMENT_METHOD_SELECT: &str = "SELECT id, payment_method_code, name, description, is_active, created_at, updated_at FROM payment_methods";

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<PaymentMethod>> {
    let sql = format!("{PAYMENT_METHOD_SELECT} WHERE is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, PaymentMethod>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<PaymentMethod>> {
    let sql = format!("{PAYMENT_METHOD_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, PaymentMethod>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<PaymentMethod>> {
    let sql = format!("{PAYMENT_METHOD_SELECT} WHERE payment_method_code = ?");
    let row = sqlx::query_as::<_, PaymentMethod>(&sql)
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: PaymentMethodCreate) -> RepoResult<PaymentMethod> {
    if find_by_code(pool, &data.payment_method_code).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Payment method code {} already exists",
            data.payment_method_code
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO payment_methods (id, payment_method_code, name, description, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.payment_method_code)
    .bind(&data.name)
    .bind(&data.description)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create payment method".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: PaymentMethodUpdate,
) -> RepoResult<PaymentMethod> {
    if let Some(code) = &data.payment_method_code
        && let Some(existing) = find_by_code(pool, code).await?
        && existing.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Payment method code {code} already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE payment_methods SET payment_method_code = COALESCE(?1, payment_method_code), name = COALESCE(?2, name), description = COALESCE(?3, description), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.payment_method_code)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Payment method {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payment method {id} not found")))
}

/// Soft delete. Existing orders keep their payment method code.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE payment_methods SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
