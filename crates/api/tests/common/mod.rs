#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use campus_api::config::{LogFormat, ServerConfig};
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_core::instructor::Instructor;
use campus_core::memory::InMemoryStore;

/// Id of the instructor every in-memory app is seeded with.
pub const KAPOOR_ID: i64 = 7;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://campus@127.0.0.1:1/campus".to_string(),
        database_max_connections: 1,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// A pool that never connects unless used, failing fast when it is.
pub fn unreachable_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy(&test_config().database_url)
        .unwrap()
}

pub fn kapoor() -> Instructor {
    Instructor {
        id: KAPOOR_ID,
        last_name: "Kapoor".into(),
        first_mid_name: "Candace".into(),
        hire_date: NaiveDate::from_ymd_opt(2001, 9, 1).unwrap(),
    }
}

/// Full router over an in-memory store seeded with one instructor.
///
/// Returns the store so tests can inspect what was persisted.
pub fn build_memory_app() -> (Router, Arc<InMemoryStore>) {
    build_memory_app_with_shutdown(CancellationToken::new())
}

pub fn build_memory_app_with_shutdown(shutdown: CancellationToken) -> (Router, Arc<InMemoryStore>) {
    let config = test_config();
    let store = Arc::new(InMemoryStore::with_instructors([kapoor()]));
    let state = AppState::with_stores(
        unreachable_pool(),
        Arc::new(config.clone()),
        store.clone(),
        store.clone(),
        shutdown,
    );
    (build_app_router(state, &config), store)
}

/// Full router over PostgreSQL, as `main.rs` wires it.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, Arc::new(config.clone()), CancellationToken::new());
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body labelled as JSON, for malformed-payload tests.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
