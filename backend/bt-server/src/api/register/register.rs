//! Registration handler

use crate::{ApiResult, AppState, RegisterRequest, RegisterResponse};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// POST /register
///
/// Validates the password, then appends the user to the credential ledger.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<RegisterResponse>> {
    let Json(request) = payload?;

    let record = state
        .registration
        .register(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(RegisterResponse {
        success: format!("Registration complete for {}.", record.username),
    }))
}
