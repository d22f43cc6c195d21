//! Reporting endpoint integration tests.

mod common;

use chrono::{Datelike, Months};
use http::StatusCode;
use serde_json::json;
use shared::models::UserRole;

use common::spawn;

#[tokio::test]
async fn overview_returns_zeros_for_empty_store() {
    let server = spawn().await;
    let (_, token) = server.create_user("admin1", UserRole::Admin).await;

    let (status, body) = server.get("/api/reports/overview", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 0);
    assert_eq!(body["total_revenue"], 0.0);
}

#[tokio::test]
async fn overview_sums_todays_orders() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin2", UserRole::Admin).await;

    let now = shared::util::now_millis();
    server.insert_order(admin.id, 1250, now).await;
    server.insert_order(admin.id, 725, now).await;

    let (status, body) = server.get("/api/reports/overview", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 2);
    assert_eq!(body["total_revenue"], 19.75);
}

#[tokio::test]
async fn overview_excludes_orders_outside_today() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin3", UserRole::Admin).await;

    let now = shared::util::now_millis();
    // Two days ago: outside the "today" window regardless of timezone
    server.insert_order(admin.id, 9999, now - 2 * 86_400_000).await;
    server.insert_order(admin.id, 500, now).await;

    let (status, body) = server.get("/api/reports/overview", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_orders"], 1);
    assert_eq!(body["total_revenue"], 5.0);
}

#[tokio::test]
async fn daily_revenue_always_returns_seven_entries() {
    let server = spawn().await;
    let (_, token) = server.create_user("admin4", UserRole::Admin).await;

    let (status, body) = server.get("/api/reports/daily-revenue", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array response");
    assert_eq!(entries.len(), 7);
    for entry in entries {
        assert_eq!(entry["revenue"], 0.0);
        let label = entry["date"].as_str().expect("string label");
        // "DD/MM - Weekday"
        assert!(label.contains(" - "), "unexpected label: {label}");
    }
}

#[tokio::test]
async fn daily_revenue_places_todays_orders_in_last_bucket() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin5", UserRole::Admin).await;

    let now = shared::util::now_millis();
    server.insert_order(admin.id, 1250, now).await;
    server.insert_order(admin.id, 725, now).await;

    let (status, body) = server.get("/api/reports/daily-revenue", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array response");
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[6]["revenue"], 19.75);
    let earlier_total: f64 = entries[..6]
        .iter()
        .map(|e| e["revenue"].as_f64().unwrap_or(0.0))
        .sum();
    assert_eq!(earlier_total, 0.0);
}

#[tokio::test]
async fn monthly_revenue_has_four_entries_and_zero_future() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin6", UserRole::Admin).await;

    // Revenue this month...
    let now = shared::util::now_millis();
    server.insert_order(admin.id, 2000, now).await;

    // ...and a spurious future order early in next month (clock skew)
    let tz = server.state.config.timezone;
    let today = chrono::Utc::now().with_timezone(&tz).date_naive();
    let next_month_day = today
        .with_day(1)
        .and_then(|d| d.checked_add_months(Months::new(1)))
        .and_then(|d| d.succ_opt())
        .expect("valid next month date");
    let future = pos_server::utils::time::day_start_millis(next_month_day, tz);
    server.insert_order(admin.id, 31337, future).await;

    let (status, body) = server.get("/api/reports/monthly-revenue", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array response");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2]["revenue"], 20.0);
    // The future month is forced to zero even though a row matched it
    assert_eq!(entries[3]["revenue"], 0.0);

    let label = entries[3]["month"].as_str().expect("string label");
    assert_eq!(label.len(), 7, "MM/YYYY label expected, got {label}");
    assert_eq!(&label[2..3], "/");
}

#[tokio::test]
async fn product_revenue_groups_on_name_snapshot() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin7", UserRole::Admin).await;
    let (_, seller_token) = server.create_user("seller7", UserRole::Seller).await;

    let (status, category) = server
        .post(
            "/api/categories",
            Some(&admin_token),
            json!({"name": "Coffee"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, product) = server
        .post(
            "/api/products",
            Some(&admin_token),
            json!({"name": "Latte", "price": 3.50, "category_id": category["id"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": product["id"], "quantity": 2}]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Rename the product; the historical report must keep the old name
    let (status, _) = server
        .request(
            "PUT",
            &format!("/api/products/{}", product["id"]),
            Some(&admin_token),
            Some(json!({"name": "Flat White"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = server
        .get("/api/reports/product-revenue", Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array response");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["product_name"], "Latte");
    assert_eq!(entries[0]["quantity"], 2);
    assert_eq!(entries[0]["total_price"], 7.0);
}

#[tokio::test]
async fn reports_are_idempotent() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin8", UserRole::Admin).await;

    let now = shared::util::now_millis();
    server.insert_order(admin.id, 1250, now).await;

    let (status_a, body_a) = server.get("/api/reports/overview", Some(&token)).await;
    let (status_b, body_b) = server.get("/api/reports/overview", Some(&token)).await;
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
}

#[tokio::test]
async fn history_rejects_unknown_date_filter() {
    let server = spawn().await;
    let (_, token) = server.create_user("admin9", UserRole::Admin).await;

    let (status, body) = server
        .get("/api/orders/history?date_filter=bogus", Some(&token))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("error message");
    assert!(message.contains("bogus"), "message should name the filter");
}

#[tokio::test]
async fn history_windows_filter_orders() {
    let server = spawn().await;
    let (admin, token) = server.create_user("admin10", UserRole::Admin).await;

    let now = shared::util::now_millis();
    server.insert_order(admin.id, 1000, now).await;
    server.insert_order(admin.id, 2000, now - 10 * 86_400_000).await;

    let (status, body) = server
        .get("/api/orders/history?date_filter=today", Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 1);

    let (status, body) = server
        .get("/api/orders/history?date_filter=30days", Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    // Descending by order date
    assert_eq!(entries[0]["total_amount"], 10.0);
    assert_eq!(entries[1]["total_amount"], 20.0);
    // Absent references render as explicit nulls
    assert!(entries[0]["customer_name"].is_null());
    assert!(entries[0]["payment_method_name"].is_null());
}

#[tokio::test]
async fn reports_require_admin_privilege() {
    let server = spawn().await;
    let (_, seller_token) = server.create_user("seller11", UserRole::Seller).await;

    for path in [
        "/api/reports/overview",
        "/api/reports/product-revenue",
        "/api/reports/daily-revenue",
        "/api/reports/monthly-revenue",
        "/api/orders/history?date_filter=today",
    ] {
        let (status, _) = server.get(path, Some(&seller_token)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "path {path}");
    }

    let (status, _) = server.get("/api/reports/overview", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
