use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    Success,
    Failure,
}

/// Last-run summary reported by `/health`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncStatus {
    pub last_run_at: Option<DateTime<Utc>>,
    pub last_outcome: Option<SyncOutcome>,
    /// Bills stored by the last successful run
    pub last_record_count: Option<u64>,
    pub last_error: Option<String>,
    pub total_runs: u64,
    pub total_failures: u64,
}

impl SyncStatus {
    pub fn record_success(&mut self, stored: u64) {
        self.last_run_at = Some(Utc::now());
        self.last_outcome = Some(SyncOutcome::Success);
        self.last_record_count = Some(stored);
        self.last_error = None;
        self.total_runs += 1;
    }

    pub fn record_failure(&mut self, error: impl Into<String>) {
        self.last_run_at = Some(Utc::now());
        self.last_outcome = Some(SyncOutcome::Failure);
        self.last_error = Some(error.into());
        self.total_runs += 1;
        self.total_failures += 1;
    }
}

pub type SharedSyncStatus = Arc<RwLock<SyncStatus>>;
