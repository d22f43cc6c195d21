//! User Repository

use shared::models::{User, UserRole};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const USER_SELECT: &str = "SELECT id, username, email, password_hash, role, is_active, last_login, created_at, updated_at FROM users";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE username = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ?");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
    role: UserRole,
) -> RepoResult<User> {
    if find_by_username(pool, username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username {username} already registered"
        )));
    }
    if find_by_email(pool, email).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Email {email} already registered"
        )));
    }

    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO users (id, username, email, password_hash, role, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6)",
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role.value())
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

pub async fn update_last_login(pool: &SqlitePool, id: i64, login_at: i64) -> RepoResult<()> {
    sqlx::query("UPDATE users SET last_login = ?1, updated_at = ?1 WHERE id = ?2")
        .bind(login_at)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
