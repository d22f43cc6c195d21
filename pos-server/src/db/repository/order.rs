//! Order Repository
//!
//! Order creation snapshots product name and unit price into the line
//! items inside a single transaction; the order total is the integer-cent
//! sum of its lines and is never recomputed afterwards.

use std::collections::HashMap;

use shared::models::{Order, OrderCreate, OrderItem, OrderStatus, Product};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const ORDER_SELECT: &str = "SELECT id, user_id, customer_id, payment_method_code, total_cents, status, created_at, updated_at FROM orders";
const ORDER_ITEM_SELECT: &str = "SELECT id, order_id, product_id, product_name, unit_price_cents, quantity, line_total_cents, created_at FROM order_items";

pub async fn create(pool: &SqlitePool, user_id: i64, data: &OrderCreate) -> RepoResult<Order> {
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "Order must contain at least one item".into(),
        ));
    }
    for item in &data.items {
        if item.quantity <= 0 {
            return Err(RepoError::Validation(format!(
                "Quantity must be positive for product {}",
                item.product_id
            )));
        }
    }

    if let Some(customer_id) = data.customer_id
        && super::customer::find_by_id(pool, customer_id).await?.is_none()
    {
        return Err(RepoError::NotFound(format!(
            "Customer {customer_id} not found"
        )));
    }
    if let Some(code) = &data.payment_method_code
        && super::payment_method::find_by_code(pool, code).await?.is_none()
    {
        return Err(RepoError::NotFound(format!(
            "Payment method {code} not found"
        )));
    }

    let mut tx = pool.begin().await?;
    let now = shared::util::now_millis();
    let order_id = shared::util::snowflake_id();

    // Resolve products inside the transaction so the snapshot is
    // consistent with the prices at commit time.
    let mut total_cents: i64 = 0;
    let mut lines: Vec<(Product, i64, i64)> = Vec::with_capacity(data.items.len());
    for item in &data.items {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price_cents, category_id, image_url, is_active, created_at, updated_at FROM products WHERE id = ? AND is_active = 1",
        )
        .bind(item.product_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", item.product_id)))?;

        let line_total = product.price_cents * item.quantity;
        total_cents += line_total;
        lines.push((product, item.quantity, line_total));
    }

    sqlx::query(
        "INSERT INTO orders (id, user_id, customer_id, payment_method_code, total_cents, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
    )
    .bind(order_id)
    .bind(user_id)
    .bind(data.customer_id)
    .bind(&data.payment_method_code)
    .bind(total_cents)
    .bind(OrderStatus::Pending.as_str())
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for (product, quantity, line_total) in &lines {
        sqlx::query(
            "INSERT INTO order_items (id, order_id, product_id, product_name, unit_price_cents, quantity, line_total_cents, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(shared::util::snowflake_id())
        .bind(order_id)
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(quantity)
        .bind(line_total)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_by_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id_for_user(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE id = ? AND user_id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let sql = format!("{ORDER_ITEM_SELECT} WHERE order_id = ? ORDER BY id");
    let rows = sqlx::query_as::<_, OrderItem>(&sql)
        .bind(order_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// All orders of one user with their items, newest first.
pub async fn find_by_user_with_items(
    pool: &SqlitePool,
    user_id: i64,
) -> RepoResult<Vec<(Order, Vec<OrderItem>)>> {
    let orders_sql = format!("{ORDER_SELECT} WHERE user_id = ? ORDER BY created_at DESC");
    let orders = sqlx::query_as::<_, Order>(&orders_sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    let items_sql = format!(
        "{ORDER_ITEM_SELECT} WHERE order_id IN (SELECT id FROM orders WHERE user_id = ?) ORDER BY id"
    );
    let items = sqlx::query_as::<_, OrderItem>(&items_sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    let mut by_order: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id).or_default().push(item);
    }

    Ok(orders
        .into_iter()
        .map(|order| {
            let items = by_order.remove(&order.id).unwrap_or_default();
            (order, items)
        })
        .collect())
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    status: OrderStatus,
) -> RepoResult<Order> {
    let now = shared::util::now_millis();
    let rows =
        sqlx::query("UPDATE orders SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4")
            .bind(status.as_str())
            .bind(now)
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Hard delete; line items go with the order (ON DELETE CASCADE).
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
