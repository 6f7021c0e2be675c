use crate::{
    BillCache, DataGovClient, Result as SyncResult, SharedSyncStatus, SyncError, SyncJob,
    SyncMetrics, SyncStatus, bill_from_record,
};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use log::{error, info, warn};
use tokio::sync::RwLock;

const JOB_NAME: &str = "bill_sync";

/// Refreshes the bill read cache from data.gov.in.
///
/// A run fetches the resource, maps each record to a bill (skipping the ones
/// that cannot be mapped) and swaps the whole set into the cache. Any failure,
/// including a fetch that yields no usable bills, leaves the cache as it was.
pub struct BillSyncJob {
    client: DataGovClient,
    cache: Arc<dyn BillCache>,
    status: SharedSyncStatus,
    metrics: SyncMetrics,
}

impl BillSyncJob {
    pub fn new(client: DataGovClient, cache: Arc<dyn BillCache>) -> Self {
        Self {
            client,
            cache,
            status: Arc::new(RwLock::new(SyncStatus::default())),
            metrics: SyncMetrics::new(),
        }
    }

    /// Shared handle to the last-run summary
    pub fn status(&self) -> SharedSyncStatus {
        self.status.clone()
    }

    /// One fetch-and-replace cycle, returning the number of bills stored
    pub async fn sync_once(&self) -> SyncResult<u64> {
        let records = self.client.fetch_records().await?;
        let fetched = records.len();

        let mut bills = Vec::with_capacity(fetched);
        let mut rejected = 0;
        for (index, record) in records.iter().enumerate() {
            match bill_from_record(record) {
                Ok(bill) => bills.push(bill),
                Err(reason) => {
                    rejected += 1;
                    warn!("Skipping upstream record {}: {}", index, reason);
                }
            }
        }

        if rejected > 0 {
            self.metrics.records_rejected(rejected);
        }

        // An empty batch would wipe the cache; keep the last good set instead
        if bills.is_empty() {
            return Err(SyncError::no_bills(fetched));
        }

        self.cache.replace_all(&bills).await
    }
}

#[async_trait]
impl SyncJob for BillSyncJob {
    fn name(&self) -> &str {
        JOB_NAME
    }

    async fn run(&self) {
        let start = Instant::now();
        let result = self.sync_once().await;
        let elapsed = start.elapsed();

        match result {
            Ok(stored) => {
                self.metrics.run_succeeded(stored, elapsed);
                self.status.write().await.record_success(stored);
                info!(
                    "Sync run '{}' succeeded: {} bills stored in {}ms",
                    JOB_NAME,
                    stored,
                    elapsed.as_millis()
                );
            }
            Err(e) => {
                self.metrics.run_failed(e.reason(), elapsed);
                self.status.write().await.record_failure(e.to_string());
                error!(
                    "Sync run '{}' failed ({}) after {}ms: {}",
                    JOB_NAME,
                    e.reason(),
                    elapsed.as_millis(),
                    e
                );
            }
        }
    }
}
