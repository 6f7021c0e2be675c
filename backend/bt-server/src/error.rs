use thiserror::Error;

/// Startup failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] bt_config::ConfigError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] bt_ledger::LedgerError),

    #[error("Database error: {0}")]
    Database(#[from] bt_db::DbError),

    #[error("Sync setup error: {0}")]
    Sync(#[from] bt_sync::SyncError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
