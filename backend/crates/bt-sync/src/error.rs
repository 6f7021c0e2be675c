use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of one sync run. Contained by the job; never reach a caller.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Request timed out after {timeout:?} {location}")]
    Timeout {
        timeout: Duration,
        location: ErrorLocation,
    },

    #[error("Upstream returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid source URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("No usable bills among {fetched} fetched records {location}")]
    NoBills { fetched: usize, location: ErrorLocation },

    #[error("Bill cache error: {message} {location}")]
    Cache {
        message: String,
        location: ErrorLocation,
    },
}

impl SyncError {
    /// Convert a reqwest error, separating timeouts from other failures
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_timeout() {
            Self::Timeout { timeout, location }
        } else if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
                location,
            }
        } else {
            Self::Http {
                message: err.to_string(),
                source: err,
                location,
            }
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_bills(fetched: usize) -> Self {
        Self::NoBills {
            fetched,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short reason label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Timeout { .. } => "timeout",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::NoBills { .. } => "no_bills",
            Self::Cache { .. } => "cache",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
