use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics emitted by the registration path
#[derive(Clone)]
pub struct LedgerMetrics {
    prefix: &'static str,
}

impl LedgerMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "bt_ledger",
        }
    }

    pub fn registration_succeeded(&self) {
        counter!(format!("{}.registrations.succeeded", self.prefix)).increment(1);
    }

    /// Record a rejected or failed registration, labelled by reason
    pub fn registration_failed(&self, reason: &str) {
        counter!(format!("{}.registrations.failed", self.prefix)).increment(1);
        counter!(format!("{}.registrations.failed.{}", self.prefix, reason)).increment(1);
    }

    /// Time spent waiting for the ledger lock plus the check-and-append itself
    pub fn append_latency(&self, duration: Duration) {
        histogram!(format!("{}.append.latency_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }
}

impl Default for LedgerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
