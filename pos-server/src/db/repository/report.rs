//! Report Repository - revenue aggregation
//!
//! Each report issues exactly one grouped query over the orders /
//! order_items tables, filtered on `created_at` within a half-open
//! `[start, end)` millisecond window. Sums stay in integer cents here;
//! only the API layer converts to floats.
//!
//! Calendar grouping passes the business timezone offset as a SQLite
//! date modifier (e.g. `"420 minutes"`), so rows bucket on local dates
//! rather than UTC. Rows for empty periods are absent; gap-filling is the
//! bucketer's job, not SQL's.

use sqlx::SqlitePool;

use super::RepoResult;

/// Aggregate totals for the overview report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OverviewRow {
    pub total_orders: i64,
    pub total_cents: i64,
}

/// Per-product aggregate keyed on the line item's stored name snapshot.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRevenueRow {
    pub product_name: String,
    pub quantity: i64,
    pub total_cents: i64,
}

/// One sparse calendar bucket: `bucket` is `YYYY-MM-DD` for daily
/// grouping, `YYYY-MM` for monthly grouping.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BucketRow {
    pub bucket: String,
    pub total_cents: i64,
}

/// One order row of the history report.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HistoryRow {
    pub id: i64,
    pub created_at: i64,
    pub total_quantity: i64,
    pub total_cents: i64,
    pub customer_name: Option<String>,
    pub payment_method_name: Option<String>,
}

/// Order count and revenue over a window. Empty windows produce zeros,
/// never an error.
pub async fn overview(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<OverviewRow> {
    let row = sqlx::query_as::<_, OverviewRow>(
        "SELECT COUNT(id) AS total_orders, COALESCE(SUM(total_cents), 0) AS total_cents FROM orders WHERE created_at >= ?1 AND created_at < ?2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Summed quantity and revenue per product name for orders in the window.
///
/// Groups on `order_items.product_name` - the snapshot taken at order
/// time - so renaming or deleting a product never rewrites history.
pub async fn revenue_by_product(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> RepoResult<Vec<ProductRevenueRow>> {
    let rows = sqlx::query_as::<_, ProductRevenueRow>(
        "SELECT oi.product_name AS product_name, SUM(oi.quantity) AS quantity, SUM(oi.line_total_cents) AS total_cents \
         FROM order_items oi \
         JOIN orders o ON o.id = oi.order_id \
         WHERE o.created_at >= ?1 AND o.created_at < ?2 \
         GROUP BY oi.product_name \
         ORDER BY oi.product_name",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Revenue per local calendar date; only dates with orders appear.
pub async fn revenue_by_day(
    pool: &SqlitePool,
    start: i64,
    end: i64,
    tz_modifier: &str,
) -> RepoResult<Vec<BucketRow>> {
    let rows = sqlx::query_as::<_, BucketRow>(
        "SELECT date(created_at / 1000, 'unixepoch', ?3) AS bucket, SUM(total_cents) AS total_cents \
         FROM orders \
         WHERE created_at >= ?1 AND created_at < ?2 \
         GROUP BY bucket \
         ORDER BY bucket",
    )
    .bind(start)
    .bind(end)
    .bind(tz_modifier)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Revenue per local calendar month; only months with orders appear.
pub async fn revenue_by_month(
    pool: &SqlitePool,
    start: i64,
    end: i64,
    tz_modifier: &str,
) -> RepoResult<Vec<BucketRow>> {
    let rows = sqlx::query_as::<_, BucketRow>(
        "SELECT strftime('%Y-%m', created_at / 1000, 'unixepoch', ?3) AS bucket, SUM(total_cents) AS total_cents \
         FROM orders \
         WHERE created_at >= ?1 AND created_at < ?2 \
         GROUP BY bucket \
         ORDER BY bucket",
    )
    .bind(start)
    .bind(end)
    .bind(tz_modifier)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// All orders in the window with item quantities and the (possibly
/// absent) customer / payment method names, newest first.
pub async fn order_history(
    pool: &SqlitePool,
    start: i64,
    end: i64,
) -> RepoResult<Vec<HistoryRow>> {
    let rows = sqlx::query_as::<_, HistoryRow>(
        "SELECT o.id AS id, o.created_at AS created_at, \
                COALESCE(SUM(oi.quantity), 0) AS total_quantity, \
                o.total_cents AS total_cents, \
                c.customer_name AS customer_name, \
                pm.name AS payment_method_name \
         FROM orders o \
         LEFT JOIN order_items oi ON oi.order_id = o.id \
         LEFT JOIN customers c ON c.id = o.customer_id \
         LEFT JOIN payment_methods pm ON pm.payment_method_code = o.payment_method_code \
         WHERE o.created_at >= ?1 AND o.created_at < ?2 \
         GROUP BY o.id \
         ORDER BY o.created_at DESC",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
