
use crate::RegistrationLedger;

use std::sync::Arc;

use tempfile::TempDir;

/// Ledger in a fresh temp directory (not yet created on disk)
pub(crate) fn temp_ledger() -> (TempDir, Arc<RegistrationLedger>) {
    let temp = TempDir::new().unwrap();
    let ledger = Arc::new(RegistrationLedger::new(
        temp.path().join("user_credentials.csv"),
    ));
    (temp, ledger)
}
