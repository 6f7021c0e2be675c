use bt_db::BillRepository;
use bt_ledger::RegistrationService;
use bt_sync::SharedSyncStatus;

/// Shared handles passed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registration: RegistrationService,
    pub bills: BillRepository,
    pub sync_status: SharedSyncStatus,
    /// Whether the periodic bill sync was armed at startup
    pub sync_enabled: bool,
}
