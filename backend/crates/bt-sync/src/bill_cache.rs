use crate::{Result as SyncResult, SyncError};

use bt_core::Bill;
use bt_db::BillRepository;

use async_trait::async_trait;

/// Destination of a sync run. Replacing is all-or-nothing.
#[async_trait]
pub trait BillCache: Send + Sync {
    /// Replace the cached bills, returning how many are stored afterwards
    async fn replace_all(&self, bills: &[Bill]) -> SyncResult<u64>;
}

#[async_trait]
impl BillCache for BillRepository {
    async fn replace_all(&self, bills: &[Bill]) -> SyncResult<u64> {
        BillRepository::replace_all(self, bills)
            .await
            .map_err(|e| SyncError::cache(e.to_string()))
    }
}
