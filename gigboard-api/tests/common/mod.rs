/// Common test utilities for integration tests
///
/// Every `TestContext` owns a fresh in-memory database, so tests can run in
/// parallel without cleanup.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use gigboard_api::app::{build_router, AppState};
use gigboard_api::config::Config;
use gigboard_shared::db::migrations::run_migrations;
use gigboard_shared::db::pool::{create_pool, DatabaseConfig};
use gigboard_shared::seed::{seed_database, Fixtures};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Response captured by `TestContext::send`
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// `Location` header value
    pub fn location(&self) -> String {
        self.headers
            .get("location")
            .expect("missing Location header")
            .to_str()
            .unwrap()
            .to_string()
    }
}

/// Test context containing the database and router
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a context over an empty, migrated database
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(DatabaseConfig::in_memory()).await?;
        run_migrations(&db).await?;

        let mut config = Config::default();
        config.seed.enabled = false;

        let app = build_router(AppState::new(db.clone(), config));

        Ok(TestContext { db, app })
    }

    /// Creates a context and loads the given fixtures
    pub async fn with_fixtures(fixtures: &Fixtures) -> anyhow::Result<Self> {
        let ctx = Self::new().await?;
        seed_database(&ctx.db, fixtures).await?;
        Ok(ctx)
    }

    /// Sends a request through the router
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

/// User payload with every required field
pub fn user_payload(first_name: &str, email: &str) -> Value {
    serde_json::json!({
        "first_name": first_name,
        "last_name": "Tester",
        "age": 30,
        "email": email,
        "role": "customer",
        "phone": "5550100"
    })
}

/// Order payload with every required field
pub fn order_payload(name: &str, address: &str, customer_id: i64, executor_id: i64) -> Value {
    serde_json::json!({
        "name": name,
        "description": "Some work",
        "start_date": "03/01/2024",
        "end_date": "03/04/2024",
        "address": address,
        "price": 1200,
        "customer_id": customer_id,
        "executor_id": executor_id
    })
}
