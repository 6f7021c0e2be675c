#![allow(dead_code)]

//! Test infrastructure for bt-server API tests

use bt_db::BillRepository;
use bt_ledger::{RegistrationLedger, RegistrationService};
use bt_server::AppState;
use bt_sync::SyncStatus;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tokio::sync::RwLock;
use tower::ServiceExt;

/// In-memory bill cache with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    bt_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over a fresh ledger in a temp dir. Keep the TempDir alive.
pub async fn create_test_app_state() -> (TempDir, AppState) {
    let temp = TempDir::new().unwrap();
    let ledger = Arc::new(RegistrationLedger::new(
        temp.path().join("user_credentials.csv"),
    ));
    ledger.ensure_initialized().await.unwrap();

    let state = AppState {
        registration: RegistrationService::new(ledger),
        bills: BillRepository::new(create_test_pool().await),
        sync_status: Arc::new(RwLock::new(SyncStatus::default())),
        sync_enabled: false,
    };

    (temp, state)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
