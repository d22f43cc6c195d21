//! Payment Method Model

use serde::{Deserialize, Serialize};

/// Payment method entity. Orders reference the stable `payment_method_code`
/// rather than the row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PaymentMethod {
    pub id: i64,
    pub payment_method_code: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create payment method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodCreate {
    pub payment_method_code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Update payment method payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodUpdate {
    pub payment_method_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
