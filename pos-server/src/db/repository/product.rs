//! Product Repository

use shared::models::Product;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const PRODUCT_SELECT: &str = "SELECT id, name, description, price_cents, category_id, image_url, is_active, created_at, updated_at FROM products";

/// Values resolved by the handler (price already converted to cents,
/// category existence already checked).
#[derive(Debug, Clone)]
pub struct ProductInsert {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub category_id: i64,
    pub image_url: Option<String>,
}

/// Partial update with resolved values.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn find_all(pool: &SqlitePool, category_id: Option<i64>) -> RepoResult<Vec<Product>> {
    let rows = match category_id {
        Some(cat) => {
            let sql =
                format!("{PRODUCT_SELECT} WHERE is_active = 1 AND category_id = ? ORDER BY name");
            sqlx::query_as::<_, Product>(&sql)
                .bind(cat)
                .fetch_all(pool)
                .await?
        }
        None => {
            let sql = format!("{PRODUCT_SELECT} WHERE is_active = 1 ORDER BY name");
            sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE name = ?");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ProductInsert) -> RepoResult<Product> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Product {} already exists",
            data.name
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO products (id, name, description, price_cents, category_id, image_url, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price_cents)
    .bind(data.category_id)
    .bind(&data.image_url)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductPatch) -> RepoResult<Product> {
    if let Some(name) = &data.name
        && let Some(existing) = find_by_name(pool, name).await?
        && existing.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Product {name} already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE products SET name = COALESCE(?1, name), description = COALESCE(?2, description), price_cents = COALESCE(?3, price_cents), category_id = COALESCE(?4, category_id), image_url = COALESCE(?5, image_url), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price_cents)
    .bind(data.category_id)
    .bind(&data.image_url)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

/// Soft delete. Historical order items keep their snapshot of the
/// product's name and price.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE products SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
