use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DatabaseConfig, LedgerConfig, LoggingConfig, ServerConfig, SyncConfig,
};

use std::path::{Component, Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ledger: LedgerConfig,
    pub database: DatabaseConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for BT_CONFIG_DIR env var, else use ./.bt/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply BT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BT_CONFIG_DIR env var > ./.bt/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.sync.validate()?;

        Self::validate_relative_path("ledger.path", &self.ledger.path)?;
        Self::validate_relative_path("database.path", &self.database.path)?;

        if Self::normalized(&self.ledger.path) == Self::normalized(&self.database.path) {
            return Err(ConfigError::storage(
                "ledger.path and database.path must point to different files",
            ));
        }

        Ok(())
    }

    /// Paths must stay inside the config dir
    fn validate_relative_path(field: &str, value: &str) -> ConfigErrorResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::storage(format!("{} cannot be empty", field)));
        }

        if Path::new(value).is_absolute() || value.contains("..") {
            return Err(ConfigError::storage(format!(
                "{} must be relative and cannot contain '..'",
                field
            )));
        }

        Ok(())
    }

    /// Relative path with `.` segments and repeated or trailing separators removed
    fn normalized(value: &str) -> PathBuf {
        Path::new(value.trim())
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Absolute path to the credential ledger file.
    pub fn ledger_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.ledger.path))
    }

    /// Absolute path to the read-cache database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  ledger: {}", self.ledger.path);
        info!("  database: {}", self.database.path);

        info!(
            "  sync: {} (every {}h, timeout {}s, limit {})",
            if self.sync.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.sync.interval_hours,
            self.sync.fetch_timeout_secs,
            self.sync.limit
        );

        info!(
            "  sync source: {}/resource/{} (api key: {})",
            self.sync.base_url,
            self.sync.resource_id,
            if self.sync.api_key.is_some() {
                "set"
            } else {
                "not set"
            }
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("BT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BT_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("BT_LEDGER_PATH", &mut self.ledger.path);
        Self::apply_env_string("BT_DATABASE_PATH", &mut self.database.path);

        // Sync
        Self::apply_env_bool("BT_SYNC_ENABLED", &mut self.sync.enabled);
        Self::apply_env_parse("BT_SYNC_INTERVAL_HOURS", &mut self.sync.interval_hours);
        Self::apply_env_parse(
            "BT_SYNC_FETCH_TIMEOUT_SECS",
            &mut self.sync.fetch_timeout_secs,
        );
        Self::apply_env_string("BT_SYNC_BASE_URL", &mut self.sync.base_url);
        Self::apply_env_string("BT_SYNC_RESOURCE_ID", &mut self.sync.resource_id);
        Self::apply_env_option_string("BT_SYNC_API_KEY", &mut self.sync.api_key);
        Self::apply_env_parse("BT_SYNC_LIMIT", &mut self.sync.limit);

        // Logging
        Self::apply_env_parse("BT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BT_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
