use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status plus the last sync outcome
pub async fn health(State(state): State<AppState>) -> Response {
    let (database, cached_bills) = match state.bills.count().await {
        Ok(count) => ("operational", Some(count)),
        Err(e) => {
            log::error!("Health check: bill cache unavailable: {}", e);
            ("unavailable", None)
        }
    };

    let ledger_present = tokio::fs::metadata(state.registration.ledger().path())
        .await
        .is_ok_and(|m| m.is_file());
    let ledger = if ledger_present {
        "operational"
    } else {
        "missing"
    };

    let sync = state.sync_status.read().await.clone();
    let healthy = database == "operational" && ledger == "operational";
    let overall = if healthy { "healthy" } else { "degraded" };

    let body = json!({
        "status": overall,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "ledger": ledger,
            "sync": {
                "enabled": state.sync_enabled,
                "status": sync,
            },
        },
        "cached_bills": cached_bills,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - can the bill cache be queried?
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.bills.count().await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
