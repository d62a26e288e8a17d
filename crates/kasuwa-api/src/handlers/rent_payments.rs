//! Rent payment HTTP handlers

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use kasuwa_core::domain::{NewRentPayment, RentPayment, RentPaymentPatch};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/v1/properties/rent-payments
pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<NewRentPayment>,
) -> ApiResult<RentPayment> {
    match state.ledger.create_payment(payload).await {
        Ok(payment) => Ok(Json(ApiResponse::success(payment))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/rent-payments/{id}
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<RentPayment> {
    match state.ledger.find_one_payment(&id).await {
        Ok(payment) => Ok(Json(ApiResponse::success(payment))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/properties/rent-payments/{id}
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RentPaymentPatch>,
) -> ApiResult<RentPayment> {
    match state.ledger.update_payment(&id, payload).await {
        Ok(payment) => Ok(Json(ApiResponse::success(payment))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/shops/{id}/rent-payments
pub async fn list_for_shop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<RentPayment>> {
    match state.ledger.find_all_for_shop(&id).await {
        Ok(payments) => Ok(Json(ApiResponse::success(payments))),
        Err(err) => Err(failure(err)),
    }
}
