//! Report API Handlers
//!
//! Presentation layer of the reporting pipeline: each handler captures a
//! single "now", resolves the window, runs one aggregation query, lets the
//! bucketer densify the result, and shapes the fixed response contract.
//! Cents become floats here and nowhere earlier.

use axum::{Json, extract::State};
use chrono::NaiveDate;

use crate::core::ServerState;
use crate::db::repository::report;
use crate::reports::{DateFilter, dense_daily, dense_monthly, month_window, report_months};
use crate::utils::time::{business_now, sqlite_tz_modifier};
use crate::utils::{AppError, AppResult};
use shared::models::{
    DailyRevenueEntry, MonthlyRevenueEntry, OverviewReport, ProductRevenueEntry,
};
use shared::util::cents_to_amount;

/// GET /api/reports/overview - today's order count and revenue
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<OverviewReport>> {
    let tz = state.config.timezone;
    let now = business_now(tz);
    let window = DateFilter::Today.window(now.date_naive());

    let row = report::overview(
        &state.pool,
        window.start_millis(tz),
        window.end_millis(tz),
    )
    .await?;

    Ok(Json(OverviewReport {
        total_orders: row.total_orders,
        total_revenue: cents_to_amount(row.total_cents),
    }))
}

/// GET /api/reports/product-revenue - today's revenue per product
///
/// Grouping keys on the line items' stored name snapshots, so past
/// reports survive product renames and deletions.
pub async fn product_revenue(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<ProductRevenueEntry>>> {
    let tz = state.config.timezone;
    let now = business_now(tz);
    let window = DateFilter::Today.window(now.date_naive());

    let rows = report::revenue_by_product(
        &state.pool,
        window.start_millis(tz),
        window.end_millis(tz),
    )
    .await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| ProductRevenueEntry {
                product_name: row.product_name,
                quantity: row.quantity,
                total_price: cents_to_amount(row.total_cents),
            })
            .collect(),
    ))
}

/// GET /api/reports/daily-revenue - last 7 days, gap-filled
pub async fn daily_revenue(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DailyRevenueEntry>>> {
    let tz = state.config.timezone;
    let now = business_now(tz);
    let window = DateFilter::Past7Days.window(now.date_naive());

    let rows = report::revenue_by_day(
        &state.pool,
        window.start_millis(tz),
        window.end_millis(tz),
        &sqlite_tz_modifier(&now),
    )
    .await?;

    let sparse = rows
        .into_iter()
        .map(|row| {
            let day = NaiveDate::parse_from_str(&row.bucket, "%Y-%m-%d")
                .map_err(|_| AppError::internal(format!("Unparsable day bucket: {}", row.bucket)))?;
            Ok((day, row.total_cents))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let series = dense_daily(window.start, window.last_day(), sparse);

    Ok(Json(
        series
            .into_iter()
            .map(|bucket| DailyRevenueEntry {
                date: bucket.label,
                revenue: cents_to_amount(bucket.total_cents),
            })
            .collect(),
    ))
}

/// GET /api/reports/monthly-revenue - fixed 4-month span
///
/// Two months prior through next month; the future month always reports
/// zero revenue.
pub async fn monthly_revenue(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<MonthlyRevenueEntry>>> {
    let tz = state.config.timezone;
    let now = business_now(tz);
    let months = report_months(now.date_naive());
    let window = month_window(&months);

    let rows = report::revenue_by_month(
        &state.pool,
        window.start_millis(tz),
        window.end_millis(tz),
        &sqlite_tz_modifier(&now),
    )
    .await?;

    let sparse = rows
        .into_iter()
        .map(|row| {
            let key = parse_month_key(&row.bucket).ok_or_else(|| {
                AppError::internal(format!("Unparsable month bucket: {}", row.bucket))
            })?;
            Ok((key, row.total_cents))
        })
        .collect::<AppResult<Vec<_>>>()?;

    let series = dense_monthly(&months, sparse);

    Ok(Json(
        series
            .into_iter()
            .map(|bucket| MonthlyRevenueEntry {
                month: bucket.label,
                revenue: cents_to_amount(bucket.total_cents),
            })
            .collect(),
    ))
}

/// Parse a `YYYY-MM` grouping key.
fn parse_month_key(bucket: &str) -> Option<(i32, u32)> {
    let (year, month) = bucket.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}
