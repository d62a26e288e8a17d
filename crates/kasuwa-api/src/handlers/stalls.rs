//! Stall HTTP handlers, including the occupancy endpoints.
//!
//! Direct stall creation is mounted only when the deployment enables it;
//! stalls otherwise come into existence through nested market creation.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use kasuwa_core::domain::{NewStall, Stall, StallPatch};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// Stall creation payload, carrying the parent market reference.
#[derive(Debug, Deserialize)]
pub struct CreateStallRequest {
    pub name: String,
    pub annual_rent_rate: f64,
    pub market_id: Uuid,
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AssignTenantRequest {
    pub tenant_id: Uuid,
}

/// POST /api/v1/properties/stalls (feature-gated)
pub async fn create_stall(
    State(state): State<AppState>,
    Json(payload): Json<CreateStallRequest>,
) -> ApiResult<Stall> {
    let CreateStallRequest {
        name,
        annual_rent_rate,
        market_id,
        tenant_id,
    } = payload;

    let new = NewStall {
        name,
        annual_rent_rate,
        tenant_id,
    };

    match state.properties.create_stall(&market_id, new).await {
        Ok(stall) => Ok(Json(ApiResponse::success(stall))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/stalls/{id}
pub async fn get_stall(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Stall> {
    match state.properties.find_one_stall(&id).await {
        Ok(stall) => Ok(Json(ApiResponse::success(stall))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/properties/stalls/{id}
pub async fn update_stall(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<StallPatch>,
) -> ApiResult<Stall> {
    match state.properties.update_stall(&id, payload).await {
        Ok(stall) => Ok(Json(ApiResponse::success(stall))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/stalls/{id}
pub async fn delete_stall(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    match state.properties.delete_stall(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(err) => Err(failure(err)),
    }
}

/// PUT /api/v1/properties/stalls/{id}/tenant
pub async fn assign_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTenantRequest>,
) -> ApiResult<Stall> {
    match state.occupancy.assign_stall(&id, &payload.tenant_id).await {
        Ok(stall) => Ok(Json(ApiResponse::success(stall))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/stalls/{id}/tenant
pub async fn clear_tenant(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Stall> {
    match state.occupancy.clear_stall(&id).await {
        Ok(stall) => Ok(Json(ApiResponse::success(stall))),
        Err(err) => Err(failure(err)),
    }
}
