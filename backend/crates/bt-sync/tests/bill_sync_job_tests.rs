//! BillSyncJob against a wiremock stand-in for data.gov.in

mod common;

use common::{API_KEY, RESOURCE_ID, RecordingCache, client, job};

use bt_core::Bill;
use bt_db::{BillRepository, run_migrations};
use bt_sync::{BillSyncJob, SyncJob, SyncOutcome};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn resource_path() -> String {
    format!("/resource/{}", RESOURCE_ID)
}

fn records_body() -> serde_json::Value {
    json!({
        "title": "Bills in Parliament",
        "total": 3,
        "records": [
            {
                "id": 101,
                "title": "The Coastal Shipping Bill",
                "ministry": "Ports, Shipping and Waterways",
                "status": "Introduced",
                "date_introduced": "2026-03-28"
            },
            {
                "id": "102",
                "title": "The Bills of Lading Bill",
                "status": "Passed in Rajya Sabha",
                "date_introduced": "10-03-2026"
            },
            {
                "title": "Record without an id"
            }
        ]
    })
}

async fn mount_records(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .and(query_param("api-key", API_KEY))
        .and(query_param("format", "json"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_body()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_valid_response_when_run_then_cache_replaced_with_valid_bills() {
    // Given
    let server = MockServer::start().await;
    mount_records(&server).await;
    let cache = Arc::new(RecordingCache::seeded(vec![Bill::new(1, "Old", "Withdrawn")]));
    let job = job(&server.uri(), cache.clone());

    // When
    job.run().await;

    // Then
    let ids: Vec<i64> = cache.bills().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![101, 102]);
    assert_eq!(cache.replacements(), 1);

    let status = job.status().read().await.clone();
    assert_eq!(status.last_outcome, Some(SyncOutcome::Success));
    assert_eq!(status.last_record_count, Some(2));
    assert_eq!(status.total_runs, 1);
}

#[tokio::test]
async fn given_server_error_when_run_then_cache_untouched_and_failure_recorded() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    let previous = vec![Bill::new(1, "Kept", "Pending")];
    let cache = Arc::new(RecordingCache::seeded(previous.clone()));
    let job = job(&server.uri(), cache.clone());

    // When
    job.run().await;

    // Then
    assert_eq!(cache.bills(), previous);
    assert_eq!(cache.replacements(), 0);

    let status = job.status().read().await.clone();
    assert_eq!(status.last_outcome, Some(SyncOutcome::Failure));
    assert_eq!(status.total_failures, 1);
    assert!(status.last_error.unwrap().contains("500"));
}

#[tokio::test]
async fn given_slow_server_when_run_then_times_out_and_cache_untouched() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let cache = Arc::new(RecordingCache::seeded(vec![Bill::new(1, "Kept", "Pending")]));
    let job = BillSyncJob::new(
        client(&server.uri(), Duration::from_millis(200)),
        cache.clone(),
    );

    // When
    let result = job.sync_once().await;

    // Then
    assert!(result.is_err_and(|e| e.reason() == "timeout"));
    assert_eq!(cache.replacements(), 0);
    assert_eq!(cache.bills().len(), 1);
}

#[tokio::test]
async fn given_non_json_body_when_synced_then_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let cache = Arc::new(RecordingCache::default());
    let job = job(&server.uri(), cache.clone());

    let result = job.sync_once().await;

    assert!(result.is_err_and(|e| e.reason() == "decode"));
    assert_eq!(cache.replacements(), 0);
}

#[tokio::test]
async fn given_unavailable_service_when_synced_then_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let job = job(&server.uri(), Arc::new(RecordingCache::default()));

    let result = job.sync_once().await;

    assert!(result.is_err_and(|e| e.reason() == "status"));
}

#[tokio::test]
async fn given_error_payload_with_ok_status_when_run_then_cache_untouched() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"error": "Invalid API key", "status": "error"})),
        )
        .mount(&server)
        .await;
    let previous = vec![Bill::new(1, "Kept", "Pending")];
    let cache = Arc::new(RecordingCache::seeded(previous.clone()));
    let job = job(&server.uri(), cache.clone());

    // When
    job.run().await;

    // Then
    assert_eq!(cache.bills(), previous);
    assert_eq!(cache.replacements(), 0);

    let status = job.status().read().await.clone();
    assert_eq!(status.last_outcome, Some(SyncOutcome::Failure));
}

#[tokio::test]
async fn given_only_unusable_records_when_run_then_cache_untouched() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {"title": "No id here"},
                {"id": "abc", "title": "Unusable id"}
            ]
        })))
        .mount(&server)
        .await;
    let previous = vec![Bill::new(1, "Kept", "Pending")];
    let cache = Arc::new(RecordingCache::seeded(previous.clone()));
    let job = job(&server.uri(), cache.clone());

    // When
    let result = job.sync_once().await;

    // Then
    assert!(result.is_err_and(|e| e.reason() == "no_bills"));
    assert_eq!(cache.bills(), previous);
    assert_eq!(cache.replacements(), 0);
}

#[tokio::test]
async fn given_empty_records_array_when_synced_then_cache_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"records": []})))
        .mount(&server)
        .await;
    let cache = Arc::new(RecordingCache::seeded(vec![Bill::new(1, "Kept", "Pending")]));
    let job = job(&server.uri(), cache.clone());

    let result = job.sync_once().await;

    assert!(result.is_err_and(|e| e.reason() == "no_bills"));
    assert_eq!(cache.bills().len(), 1);
}

#[tokio::test]
async fn given_failing_cache_when_run_then_failure_recorded() {
    // Given
    let server = MockServer::start().await;
    mount_records(&server).await;
    let job = job(&server.uri(), Arc::new(RecordingCache::failing()));

    // When
    job.run().await;

    // Then
    let status = job.status().read().await.clone();
    assert_eq!(status.last_outcome, Some(SyncOutcome::Failure));
    assert!(status.last_error.unwrap().contains("disk full"));
}

#[tokio::test]
async fn given_unreachable_host_when_run_then_does_not_panic() {
    // Nothing listens on port 9 of localhost in the test environment
    let cache = Arc::new(RecordingCache::default());
    let job = job("http://127.0.0.1:9", cache.clone());

    job.run().await;

    let status = job.status().read().await.clone();
    assert_eq!(status.last_outcome, Some(SyncOutcome::Failure));
    assert_eq!(cache.replacements(), 0);
}

#[tokio::test]
async fn given_sqlite_cache_when_run_then_bills_listed_newest_first() {
    // Given
    let server = MockServer::start().await;
    mount_records(&server).await;

    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    let repository = Arc::new(BillRepository::new(pool));

    let job = job(&server.uri(), repository.clone());

    // When
    job.run().await;

    // Then
    let bills = repository.find_all().await.unwrap();
    let ids: Vec<i64> = bills.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![101, 102]);
    assert_eq!(repository.count().await.unwrap(), 2);
}
