//! Registration record - one row of the credential ledger.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{Local, NaiveDateTime, Timelike};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Ledger timestamp format (`YYYY-MM-DD HH:MM:SS`, local wall-clock time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A registered user as recorded in the append-only ledger.
///
/// Records are immutable once appended. `username` and `email` are each
/// unique across the whole ledger (exact, case-sensitive match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub timestamp: NaiveDateTime,
    pub username: String,
    pub email: String,
}

impl RegistrationRecord {
    /// Create a record stamped with the current local time (second precision)
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Local::now().naive_local();
        Self {
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Timestamp rendered in ledger format
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a ledger-formatted timestamp
    #[track_caller]
    pub fn parse_timestamp(value: &str) -> CoreErrorResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|source| {
            CoreError::InvalidTimestamp {
                value: value.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// True if this record collides with the given identity on either field
    pub fn collides_with(&self, username: &str, email: &str) -> bool {
        self.username == username || self.email == email
    }
}
