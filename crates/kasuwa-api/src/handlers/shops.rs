//! Shop HTTP handlers, including the occupancy endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use kasuwa_core::domain::{NewShop, Shop, ShopPatch};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// Shop creation payload, carrying the parent building reference.
#[derive(Debug, Deserialize)]
pub struct CreateShopRequest {
    pub name: String,
    pub annual_rent_rate: f64,
    pub size: Option<f64>,
    pub building_id: Uuid,
    pub tenant_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AssignTenantRequest {
    pub tenant_id: Uuid,
}

/// POST /api/v1/properties/shops
pub async fn create_shop(
    State(state): State<AppState>,
    Json(payload): Json<CreateShopRequest>,
) -> ApiResult<Shop> {
    let CreateShopRequest {
        name,
        annual_rent_rate,
        size,
        building_id,
        tenant_id,
    } = payload;

    let new = NewShop {
        name,
        annual_rent_rate,
        size,
        tenant_id,
    };

    match state.properties.create_shop(&building_id, new).await {
        Ok(shop) => Ok(Json(ApiResponse::success(shop))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/shops/{id}
pub async fn get_shop(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Shop> {
    match state.properties.find_one_shop(&id).await {
        Ok(shop) => Ok(Json(ApiResponse::success(shop))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/properties/shops/{id}
pub async fn update_shop(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ShopPatch>,
) -> ApiResult<Shop> {
    match state.properties.update_shop(&id, payload).await {
        Ok(shop) => Ok(Json(ApiResponse::success(shop))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/shops/{id}
pub async fn delete_shop(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    match state.properties.delete_shop(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(err) => Err(failure(err)),
    }
}

/// PUT /api/v1/properties/shops/{id}/tenant
pub async fn assign_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTenantRequest>,
) -> ApiResult<Shop> {
    match state.occupancy.assign_shop(&id, &payload.tenant_id).await {
        Ok(shop) => Ok(Json(ApiResponse::success(shop))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/shops/{id}/tenant
pub async fn clear_tenant(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Shop> {
    match state.occupancy.clear_shop(&id).await {
        Ok(shop) => Ok(Json(ApiResponse::success(shop))),
        Err(err) => Err(failure(err)),
    }
}
