//! Category Repository

use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const CATEGORY_SELECT: &str =
    "SELECT id, name, description, image_url, is_active, created_at, updated_at FROM categories";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, Category>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Category>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let sql = format!("{CATEGORY_SELECT} WHERE name = ?");
    let row = sqlx::query_as::<_, Category>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Category {} already exists",
            data.name
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO categories (id, name, description, image_url, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    if let Some(name) = &data.name
        && let Some(existing) = find_by_name(pool, name).await?
        && existing.id != id
    {
        return Err(RepoError::Duplicate(format!(
            "Category {name} already exists"
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE categories SET name = COALESCE(?1, name), description = COALESCE(?2, description), image_url = COALESCE(?3, image_url), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Soft delete
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE categories SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
