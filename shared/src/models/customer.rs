//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub customer_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub customer_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
}

/// Update customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
