pub mod bill_cache;
pub mod bill_record;
pub mod bill_sync_job;
pub mod data_gov_client;
pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod sync_job;
pub mod sync_status;

pub use bill_cache::BillCache;
pub use bill_record::bill_from_record;
pub use bill_sync_job::BillSyncJob;
pub use data_gov_client::DataGovClient;
pub use error::{Result, SyncError};
pub use metrics::SyncMetrics;
pub use scheduler::SyncScheduler;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use sync_job::SyncJob;
pub use sync_status::{SharedSyncStatus, SyncOutcome, SyncStatus};
