//! Order Models
//!
//! Orders own their line items (cascade delete). Line items carry a
//! denormalized snapshot of the product name and unit price taken at order
//! time; they are never updated when the source product changes.

use serde::{Deserialize, Serialize};

use crate::util::cents_to_amount;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub customer_id: Option<i64>,
    pub payment_method_code: Option<String>,
    pub total_cents: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order line item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
    pub created_at: i64,
}

/// Line item input for order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub product_id: i64,
    pub quantity: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderItemCreate>,
    pub customer_id: Option<i64>,
    pub payment_method_code: Option<String>,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// Line item as rendered in API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub line_total: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            unit_price: cents_to_amount(item.unit_price_cents),
            quantity: item.quantity,
            line_total: cents_to_amount(item.line_total_cents),
        }
    }
}

/// Order with items as rendered in API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub total_amount: f64,
    pub status: String,
    pub customer_id: Option<i64>,
    pub payment_method_code: Option<String>,
    pub created_at: i64,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_order(order: Order, items: Vec<OrderItem>) -> Self {
        Self {
            id: order.id,
            total_amount: cents_to_amount(order.total_cents),
            status: order.status,
            customer_id: order.customer_id,
            payment_method_code: order.payment_method_code,
            created_at: order.created_at,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
