//! REST API error types
//!
//! Every failure is rendered as `{"error": {"code", "message", "field"?}}`
//! with a matching HTTP status.

use bt_core::PasswordPolicy;
use bt_db::DbError;
use bt_ledger::RegistrationError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "WEAK_PASSWORD")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Password does not meet the complexity rule (400)
    #[error("Weak password {location}")]
    WeakPassword { location: ErrorLocation },

    /// Missing or invalid field (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Username or email already registered (409)
    #[error("Already registered {location}")]
    AlreadyRegistered { location: ErrorLocation },

    /// Ledger could not be read or written (500); detail is logged only
    #[error("Storage failure: {detail} {location}")]
    StorageFailure {
        detail: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::WeakPassword { .. } | Self::Validation { .. } | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::AlreadyRegistered { .. } => StatusCode::CONFLICT,
            Self::StorageFailure { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::WeakPassword { .. } => ApiErrorBody {
                code: "WEAK_PASSWORD".into(),
                message: PasswordPolicy::RULE.into(),
                field: Some("password".into()),
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::AlreadyRegistered { .. } => ApiErrorBody {
                code: "ALREADY_REGISTERED".into(),
                message: "User or email already registered".into(),
                field: None,
            },
            ApiError::StorageFailure { .. } => ApiErrorBody {
                code: "STORAGE_FAILURE".into(),
                message: "Registration could not be stored, please try again later".into(),
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    #[track_caller]
    fn from(e: RegistrationError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            RegistrationError::WeakPassword { .. } => ApiError::WeakPassword { location },
            RegistrationError::MissingField { field, .. } => ApiError::Validation {
                message: format!("{} is required", field),
                field: Some(field.to_string()),
                location,
            },
            RegistrationError::AlreadyRegistered { .. } => ApiError::AlreadyRegistered { location },
            RegistrationError::StorageFailure { source, .. } => ApiError::StorageFailure {
                detail: source.to_string(),
                location,
            },
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
