use crate::DEFAULT_LEDGER_FILENAME;

use serde::Deserialize;

/// Credential ledger location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// CSV file, relative to the config dir
    pub path: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_LEDGER_FILENAME),
        }
    }
}
