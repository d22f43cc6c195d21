//! Shared domain models and utilities for the Coffee POS backend.
//!
//! This crate holds everything both the server and its integration tests
//! agree on:
//!
//! - `models`: database entities and API payload/response types
//! - `util`: timestamps, snowflake-style IDs, money conversion
//!
//! Database derives (`sqlx::FromRow`) are gated behind the `db` feature so
//! lightweight consumers can use the plain DTOs without pulling in sqlx.

pub mod models;
pub mod util;
