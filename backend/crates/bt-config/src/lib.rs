mod config;
mod database_config;
mod error;
mod ledger_config;
mod log_level;
mod logging_config;
mod server_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use ledger_config::LedgerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sync_config::SyncConfig;

const CONFIG_DIR_ENV: &str = "BT_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".bt";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "bills.db";
const DEFAULT_LEDGER_FILENAME: &str = "user_credentials.csv";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
