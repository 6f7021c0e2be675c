use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for the sync scheduler and bill sync job
#[derive(Clone)]
pub struct SyncMetrics {
    prefix: &'static str,
}

impl SyncMetrics {
    pub fn new() -> Self {
        Self { prefix: "bt_sync" }
    }

    pub fn run_succeeded(&self, stored: u64, duration: Duration) {
        counter!(format!("{}.runs.succeeded", self.prefix)).increment(1);
        gauge!(format!("{}.records.stored", self.prefix)).set(stored as f64);
        self.run_duration(duration);
    }

    pub fn run_failed(&self, reason: &str, duration: Duration) {
        counter!(format!("{}.runs.failed", self.prefix)).increment(1);
        counter!(format!("{}.runs.failed.{}", self.prefix, reason)).increment(1);
        self.run_duration(duration);
    }

    /// Upstream records that could not be turned into bills
    pub fn records_rejected(&self, count: usize) {
        counter!(format!("{}.records.rejected", self.prefix)).increment(count as u64);
    }

    /// Tick dropped because the previous run was still in flight
    pub fn tick_skipped(&self) {
        counter!(format!("{}.ticks.skipped", self.prefix)).increment(1);
    }

    pub fn job_panicked(&self) {
        counter!(format!("{}.runs.panicked", self.prefix)).increment(1);
    }

    fn run_duration(&self, duration: Duration) {
        histogram!(format!("{}.run.duration_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for SyncMetrics {
    fn default() -> Self {
        Self::new()
    }
}
