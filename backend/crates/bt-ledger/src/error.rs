use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the ledger store itself
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Username or email already present (which one is deliberately not reported)
    #[error("Username or email already registered {location}")]
    Duplicate { location: ErrorLocation },

    #[error("Ledger I/O error on {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Ledger {path} is corrupt at line {line}: {message} {location}")]
    Corrupt {
        path: PathBuf,
        line: u64,
        message: String,
        location: ErrorLocation,
    },
}

impl LedgerError {
    #[track_caller]
    pub fn duplicate() -> Self {
        Self::Duplicate {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(path: &Path, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(path: &Path, line: u64, message: S) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            line,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Outcome of a registration request, as seen by the HTTP layer
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Weak password {location}")]
    WeakPassword { location: ErrorLocation },

    #[error("Missing required field: {field} {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("User or email already registered {location}")]
    AlreadyRegistered { location: ErrorLocation },

    #[error("Registration storage failure: {source} {location}")]
    StorageFailure {
        #[source]
        source: LedgerError,
        location: ErrorLocation,
    },
}

impl RegistrationError {
    #[track_caller]
    pub fn weak_password() -> Self {
        Self::WeakPassword {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short reason label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::WeakPassword { .. } => "weak_password",
            Self::MissingField { .. } => "missing_field",
            Self::AlreadyRegistered { .. } => "already_registered",
            Self::StorageFailure { .. } => "storage_failure",
        }
    }
}

impl From<LedgerError> for RegistrationError {
    #[track_caller]
    fn from(source: LedgerError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            LedgerError::Duplicate { .. } => Self::AlreadyRegistered { location },
            source => Self::StorageFailure { source, location },
        }
    }
}

pub type RegistrationResult<T> = std::result::Result<T, RegistrationError>;
