//! Authentication endpoint integration tests.

mod common;

use http::StatusCode;
use serde_json::json;

use common::spawn;

#[tokio::test]
async fn register_login_me_round_trip() {
    let server = spawn().await;

    let (status, user) = server
        .post(
            "/api/auth/register",
            None,
            json!({"username": "barista", "email": "barista@example.com", "password": "hunter2hunter2"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "barista");
    assert_eq!(user["role"], 1);
    assert!(user.get("password_hash").is_none());

    let (status, login) = server
        .post(
            "/api/auth/login",
            None,
            json!({"username": "barista", "password": "hunter2hunter2"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = login["token"].as_str().expect("token string");
    assert!(login["user"]["last_login"].is_i64());

    let (status, me) = server.get("/api/auth/me", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "barista");
}

#[tokio::test]
async fn register_rejects_duplicates() {
    let server = spawn().await;

    let payload = json!({
        "username": "dup",
        "email": "dup@example.com",
        "password": "hunter2hunter2"
    });
    let (status, _) = server.post("/api/auth/register", None, payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = server.post("/api/auth/register", None, payload).await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Same email, different username
    let (status, _) = server
        .post(
            "/api/auth/register",
            None,
            json!({"username": "dup2", "email": "dup@example.com", "password": "hunter2hunter2"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let server = spawn().await;

    let (status, _) = server
        .post(
            "/api/auth/register",
            None,
            json!({"username": "carl", "email": "carl@example.com", "password": "hunter2hunter2"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, wrong_pass) = server
        .post(
            "/api/auth/login",
            None,
            json!({"username": "carl", "password": "nope"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, no_user) = server
        .post(
            "/api/auth/login",
            None,
            json!({"username": "nobody", "password": "nope"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Identical message either way: no username enumeration
    assert_eq!(wrong_pass["message"], no_user["message"]);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_garbage_tokens() {
    let server = spawn().await;

    let (status, _) = server.get("/api/orders", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = server.get("/api/orders", Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Health stays public
    let (status, body) = server.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
