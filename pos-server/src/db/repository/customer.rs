//! Customer Repository

use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const CUSTOMER_SELECT: &str = "SELECT id, customer_name, phone, address, city, sort_order, is_active, created_at, updated_at FROM customers";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} ORDER BY sort_order, customer_name");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE is_active = 1 ORDER BY sort_order, customer_name");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO customers (id, customer_name, phone, address, city, sort_order, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.customer_name)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.city)
    .bind(data.sort_order)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CustomerUpdate) -> RepoResult<Customer> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE customers SET customer_name = COALESCE(?1, customer_name), phone = COALESCE(?2, phone), address = COALESCE(?3, address), city = COALESCE(?4, city), sort_order = COALESCE(?5, sort_order), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.customer_name)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.city)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

/// Soft delete. Existing orders keep their customer reference.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE customers SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
