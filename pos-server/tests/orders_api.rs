//! Order endpoint integration tests.

mod common;

use http::StatusCode;
use serde_json::json;
use shared::models::UserRole;

use common::spawn;

async fn seed_product(server: &common::TestServer, admin_token: &str, price: f64) -> i64 {
    let (status, category) = server
        .post(
            "/api/categories",
            Some(admin_token),
            json!({"name": "Drinks"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, product) = server
        .post(
            "/api/products",
            Some(admin_token),
            json!({"name": "Espresso", "price": price, "category_id": category["id"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    product["id"].as_i64().expect("product id")
}

#[tokio::test]
async fn create_order_snapshots_items_and_total() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin", UserRole::Admin).await;
    let (_, seller_token) = server.create_user("seller", UserRole::Seller).await;

    let product_id = seed_product(&server, &admin_token, 2.50).await;

    let (status, order) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": product_id, "quantity": 3}]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["total_amount"], 7.5);
    assert_eq!(order["status"], "pending");
    let items = order["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_name"], "Espresso");
    assert_eq!(items[0]["unit_price"], 2.5);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["line_total"], 7.5);
}

#[tokio::test]
async fn create_order_rejects_bad_input() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin", UserRole::Admin).await;
    let (_, seller_token) = server.create_user("seller", UserRole::Seller).await;

    let product_id = seed_product(&server, &admin_token, 2.50).await;

    // Empty order
    let (status, _) = server
        .post("/api/orders", Some(&seller_token), json!({"items": []}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Non-positive quantity
    let (status, _) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": product_id, "quantity": 0}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown product
    let (status, _) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": 999999, "quantity": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown customer
    let (status, _) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({
                "items": [{"product_id": product_id, "quantity": 1}],
                "customer_id": 424242
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn orders_are_scoped_to_their_owner() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin", UserRole::Admin).await;
    let (_, alice_token) = server.create_user("alice", UserRole::Seller).await;
    let (_, bob_token) = server.create_user("bob", UserRole::Seller).await;

    let product_id = seed_product(&server, &admin_token, 2.00).await;

    let (status, order) = server
        .post(
            "/api/orders",
            Some(&alice_token),
            json!({"items": [{"product_id": product_id, "quantity": 1}]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let order_id = order["id"].as_i64().expect("order id");

    let (status, list) = server.get("/api/orders", Some(&alice_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().expect("array").len(), 1);

    let (status, list) = server.get("/api/orders", Some(&bob_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().expect("array").is_empty());

    let (status, _) = server
        .get(&format!("/api/orders/{order_id}"), Some(&bob_token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_update_validates_and_applies() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin", UserRole::Admin).await;
    let (_, seller_token) = server.create_user("seller", UserRole::Seller).await;

    let product_id = seed_product(&server, &admin_token, 4.00).await;
    let (_, order) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": product_id, "quantity": 1}]}),
        )
        .await;
    let order_id = order["id"].as_i64().expect("order id");

    let (status, _) = server
        .request(
            "PUT",
            &format!("/api/orders/{order_id}/status"),
            Some(&seller_token),
            Some(json!({"status": "shipped"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = server
        .request(
            "PUT",
            &format!("/api/orders/{order_id}/status"),
            Some(&seller_token),
            Some(json!({"status": "completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");
}

#[tokio::test]
async fn delete_cascades_and_requires_admin() {
    let server = spawn().await;
    let (_, admin_token) = server.create_user("admin", UserRole::Admin).await;
    let (_, seller_token) = server.create_user("seller", UserRole::Seller).await;

    let product_id = seed_product(&server, &admin_token, 1.00).await;
    let (_, order) = server
        .post(
            "/api/orders",
            Some(&seller_token),
            json!({"items": [{"product_id": product_id, "quantity": 2}]}),
        )
        .await;
    let order_id = order["id"].as_i64().expect("order id");

    // Sellers may not delete
    let (status, _) = server
        .request(
            "DELETE",
            &format!("/api/orders/{order_id}"),
            Some(&seller_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, deleted) = server
        .request(
            "DELETE",
            &format!("/api/orders/{order_id}"),
            Some(&admin_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, serde_json::Value::Bool(true));

    let (status, _) = server
        .get(&format!("/api/orders/{order_id}"), Some(&seller_token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Items went with the order
    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(id) FROM order_items WHERE order_id = ?")
            .bind(order_id)
            .fetch_one(&server.state.pool)
            .await
            .expect("count query");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn history_includes_customer_and_payment_names() {
    let server = spawn().await;
    let (admin, admin_token) = server.create_user("admin", UserRole::Admin).await;

    let (status, customer) = server
        .post(
            "/api/customers",
            Some(&admin_token),
            json!({"customer_name": "Walk-in"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = server
        .post(
            "/api/payment-methods",
            Some(&admin_token),
            json!({"payment_method_code": "CASH", "name": "Cash"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let now = shared::util::now_millis();
    server
        .insert_order_full(
            admin.id,
            1500,
            now,
            customer["id"].as_i64(),
            Some("CASH"),
        )
        .await;

    let (status, body) = server
        .get("/api/orders/history?date_filter=today", Some(&admin_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["customer_name"], "Walk-in");
    assert_eq!(entries[0]["payment_method_name"], "Cash");
    assert_eq!(entries[0]["total_amount"], 15.0);
}
