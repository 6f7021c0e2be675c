use bt_server::{AppState, ServerError, build_router, logger};

use bt_config::Config;
use bt_db::BillRepository;
use bt_ledger::{RegistrationLedger, RegistrationService};
use bt_sync::{BillSyncJob, DataGovClient, ShutdownCoordinator, SyncScheduler};

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Io {
            path: log_dir.display().to_string(),
            source: e,
        })?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bt-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Credential ledger
    let ledger = Arc::new(RegistrationLedger::new(config.ledger_path()?));
    ledger
        .ensure_initialized()
        .await
        .map_err(ServerError::from)?;
    info!("Registration ledger: {}", ledger.path().display());

    // Bill read cache
    let pool = bt_db::open_pool(&config.database_path()?)
        .await
        .map_err(ServerError::from)?;
    let bills = BillRepository::new(pool);

    // Periodic bill sync
    let client = DataGovClient::from_config(&config.sync).map_err(ServerError::from)?;
    let job = BillSyncJob::new(client, Arc::new(bills.clone()));
    let sync_status = job.status();

    let scheduler = if config.sync.enabled {
        Some(SyncScheduler::start(Arc::new(job), config.sync.interval()))
    } else {
        warn!("Bill sync DISABLED - /api/bills serves whatever is already cached");
        None
    };

    // One coordinator stops both the HTTP server and the scheduler
    let shutdown = scheduler
        .as_ref()
        .map(SyncScheduler::shutdown_handle)
        .unwrap_or_default();

    let app_state = AppState {
        registration: RegistrationService::new(ledger),
        bills,
        sync_status,
        sync_enabled: scheduler.is_some(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let mut server_guard = shutdown.subscribe_guard();
    spawn_signal_handler(shutdown.clone());

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_guard.wait().await;
            info!("HTTP server draining connections");
        })
        .await?;

    if let Some(scheduler) = scheduler {
        scheduler.stop().await;
    }

    info!("Graceful shutdown complete");
    Ok(())
}

fn spawn_signal_handler(shutdown: ShutdownCoordinator) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });
}
