//! Report response shapes.
//!
//! These are the fixed contracts of the reporting endpoints. Revenue
//! values are floats produced from integer-cent sums at this boundary
//! only. `customer_name` / `payment_method_name` on history entries render
//! as explicit `null` when absent, never omitted.

use serde::{Deserialize, Serialize};

/// GET /api/reports/overview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewReport {
    pub total_orders: i64,
    pub total_revenue: f64,
}

/// One row of GET /api/reports/product-revenue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRevenueEntry {
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

/// One row of GET /api/reports/daily-revenue, label "DD/MM - Weekday"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRevenueEntry {
    pub date: String,
    pub revenue: f64,
}

/// One row of GET /api/reports/monthly-revenue, label "MM/YYYY"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenueEntry {
    pub month: String,
    pub revenue: f64,
}

/// One row of GET /api/orders/history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistoryEntry {
    pub id: i64,
    pub order_date: String,
    pub total_quantity: i64,
    pub total_amount: f64,
    pub customer_name: Option<String>,
    pub payment_method_name: Option<String>,
}
