//! Shared helpers for integration tests: a server over a temp-dir SQLite
//! database and request plumbing through the real router.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use pos_server::auth::JwtConfig;
use pos_server::auth::password;
use pos_server::core::build_router;
use pos_server::db::repository::user;
use pos_server::{Config, ServerState};
use shared::models::{User, UserRole};

pub const TEST_PASSWORD: &str = "test-password";

pub struct TestServer {
    pub state: ServerState,
    pub router: Router,
    _work_dir: TempDir,
}

pub async fn spawn() -> TestServer {
    let work_dir = TempDir::new().expect("temp work dir");

    let mut config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);
    config.jwt = JwtConfig {
        secret: "integration-test-secret-integration-test-secret".to_string(),
        expiration_minutes: 60,
        issuer: "pos-server".to_string(),
        audience: "pos-clients".to_string(),
    };
    config.admin_password = None;

    let state = ServerState::initialize(&config)
        .await
        .expect("server state initializes");
    let router = build_router(state.clone());

    TestServer {
        state,
        router,
        _work_dir: work_dir,
    }
}

impl TestServer {
    /// Create a user directly in the store and mint a token for it.
    pub async fn create_user(&self, username: &str, role: UserRole) -> (User, String) {
        let hash = password::hash_password(TEST_PASSWORD).expect("password hashes");
        let email = format!("{username}@example.com");
        let account = user::create(&self.state.pool, username, &email, &hash, role)
            .await
            .expect("user creates");
        let token = self
            .state
            .jwt_service
            .generate_token(account.id, &account.username, account.role)
            .expect("token generates");
        (account, token)
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.request("GET", path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("POST", path, token, Some(body)).await
    }

    /// Insert an order row directly, bypassing the API, to control
    /// `created_at` precisely.
    pub async fn insert_order(&self, user_id: i64, total_cents: i64, created_at: i64) -> i64 {
        self.insert_order_full(user_id, total_cents, created_at, None, None)
            .await
    }

    pub async fn insert_order_full(
        &self,
        user_id: i64,
        total_cents: i64,
        created_at: i64,
        customer_id: Option<i64>,
        payment_method_code: Option<&str>,
    ) -> i64 {
        let id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO orders (id, user_id, customer_id, payment_method_code, total_cents, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 'pending', ?6, ?6)",
        )
        .bind(id)
        .bind(user_id)
        .bind(customer_id)
        .bind(payment_method_code)
        .bind(total_cents)
        .bind(created_at)
        .execute(&self.state.pool)
        .await
        .expect("order inserts");
        id
    }
}
