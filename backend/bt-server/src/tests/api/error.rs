use crate::ApiError;

use bt_core::PasswordPolicy;
use bt_ledger::{LedgerError, RegistrationError};

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_weak_password_returns_400_with_rule() {
    let error = ApiError::WeakPassword {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "WEAK_PASSWORD");
    assert_eq!(json["error"]["message"], PasswordPolicy::RULE);
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "email is required".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_already_registered_returns_409() {
    let error = ApiError::AlreadyRegistered {
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "ALREADY_REGISTERED");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_storage_failure_returns_500_without_detail() {
    let error = ApiError::StorageFailure {
        detail: "Ledger I/O error on /secret/path".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "STORAGE_FAILURE");
    assert!(
        !json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("/secret/path")
    );
}

#[test]
fn test_registration_errors_map_to_api_errors() {
    let weak = ApiError::from(RegistrationError::weak_password());
    let missing = ApiError::from(RegistrationError::missing_field("username"));
    let duplicate = ApiError::from(RegistrationError::from(LedgerError::duplicate()));
    let storage = ApiError::from(RegistrationError::from(LedgerError::corrupt(
        std::path::Path::new("ledger.csv"),
        3,
        "bad row",
    )));

    assert!(matches!(weak, ApiError::WeakPassword { .. }));
    assert!(matches!(
        missing,
        ApiError::Validation { field: Some(ref f), .. } if f == "username"
    ));
    assert!(matches!(duplicate, ApiError::AlreadyRegistered { .. }));
    assert!(matches!(storage, ApiError::StorageFailure { ref detail, .. } if detail.contains("line 3")));
}

#[test]
fn test_status_codes_per_variant() {
    let internal = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let bad_request = ApiError::BadRequest {
        message: "not json".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);
}
