//! Repository Module
//!
//! Data access functions over the SQLite pool, one module per table.
//! Repositories take `&SqlitePool` plus plain values; all date-to-millis
//! conversion happens at the API handler layer.

pub mod category;
pub mod customer;
pub mod order;
pub mod payment_method;
pub mod product;
pub mod report;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
