use crate::{ApiResult, AppState, BillDto};

use axum::{Json, extract::State};

/// GET /api/bills
///
/// Cached bills, newest introduction date first.
pub async fn list_bills(State(state): State<AppState>) -> ApiResult<Json<Vec<BillDto>>> {
    let bills = state.bills.find_all().await?;

    Ok(Json(bills.into_iter().map(BillDto::from).collect()))
}
