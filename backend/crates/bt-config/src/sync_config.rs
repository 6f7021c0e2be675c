use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Sync constraints
pub const MIN_INTERVAL_HOURS: u64 = 1;
pub const MAX_INTERVAL_HOURS: u64 = 168;
pub const DEFAULT_INTERVAL_HOURS: u64 = 24;

pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 10_000;
pub const DEFAULT_LIMIT: u32 = 500;

pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.in";
pub const DEFAULT_RESOURCE_ID: &str = "4772aba4-fc40-4ea7-af96-33c3e3c6b768";

/// Periodic bill sync configuration.
///
/// The scheduler fires once per `interval_hours`, starting one full
/// interval after process start.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Arm the scheduler at startup
    pub enabled: bool,
    /// Hours between sync runs
    pub interval_hours: u64,
    /// Upper bound on one remote fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Dataset provider base URL
    pub base_url: String,
    /// Dataset resource identifier
    pub resource_id: String,
    /// Provider API key (never logged)
    pub api_key: Option<String>,
    /// Maximum records requested per fetch
    pub limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            interval_hours: DEFAULT_INTERVAL_HOURS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            base_url: String::from(DEFAULT_BASE_URL),
            resource_id: String::from(DEFAULT_RESOURCE_ID),
            api_key: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_hours < MIN_INTERVAL_HOURS || self.interval_hours > MAX_INTERVAL_HOURS {
            return Err(ConfigError::sync(format!(
                "sync.interval_hours must be {}-{}, got {}",
                MIN_INTERVAL_HOURS, MAX_INTERVAL_HOURS, self.interval_hours
            )));
        }

        if self.fetch_timeout_secs < MIN_FETCH_TIMEOUT_SECS
            || self.fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS
        {
            return Err(ConfigError::sync(format!(
                "sync.fetch_timeout_secs must be {}-{}, got {}",
                MIN_FETCH_TIMEOUT_SECS, MAX_FETCH_TIMEOUT_SECS, self.fetch_timeout_secs
            )));
        }

        if self.limit < MIN_LIMIT || self.limit > MAX_LIMIT {
            return Err(ConfigError::sync(format!(
                "sync.limit must be {}-{}, got {}",
                MIN_LIMIT, MAX_LIMIT, self.limit
            )));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::sync(format!(
                "sync.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.resource_id.trim().is_empty() {
            return Err(ConfigError::sync("sync.resource_id cannot be empty"));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_hours * 60 * 60)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
