#![allow(dead_code)]

use bt_core::Bill;
use bt_sync::{BillCache, BillSyncJob, DataGovClient, SyncError};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub const RESOURCE_ID: &str = "test-resource";
pub const API_KEY: &str = "test-key";

/// In-memory cache that records every replacement
#[derive(Default)]
pub struct RecordingCache {
    bills: Mutex<Vec<Bill>>,
    replacements: AtomicUsize,
    fail: bool,
}

impl RecordingCache {
    pub fn seeded(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.lock().unwrap().clone()
    }

    pub fn replacements(&self) -> usize {
        self.replacements.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BillCache for RecordingCache {
    async fn replace_all(&self, bills: &[Bill]) -> bt_sync::Result<u64> {
        if self.fail {
            return Err(SyncError::cache("disk full"));
        }
        self.replacements.fetch_add(1, Ordering::SeqCst);
        *self.bills.lock().unwrap() = bills.to_vec();
        Ok(bills.len() as u64)
    }
}

pub fn client(base_url: &str, timeout: Duration) -> DataGovClient {
    DataGovClient::new(
        base_url,
        RESOURCE_ID,
        Some(API_KEY.to_string()),
        50,
        timeout,
    )
    .unwrap()
}

pub fn job(base_url: &str, cache: Arc<dyn BillCache>) -> BillSyncJob {
    BillSyncJob::new(client(base_url, Duration::from_secs(5)), cache)
}
