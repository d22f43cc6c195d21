//! API route modules
//!
//! One module per resource, each exposing a `router()` merged by
//! `core::server::build_app`:
//!
//! - [`health`] - health check (public)
//! - [`auth`] - login / register / current user
//! - [`categories`] - category management
//! - [`products`] - product management
//! - [`customers`] - customer management
//! - [`payment_methods`] - payment method management
//! - [`orders`] - order creation, listing, status, history
//! - [`reports`] - revenue reports (admin)

pub mod auth;
pub mod categories;
pub mod customers;
pub mod health;
pub mod orders;
pub mod payment_methods;
pub mod products;
pub mod reports;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
