//! Building HTTP handlers

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use kasuwa_core::domain::{Building, BuildingPatch, NewBuilding, Shop};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// Building creation payload, carrying the parent market reference.
#[derive(Debug, Deserialize)]
pub struct CreateBuildingRequest {
    pub name: String,
    pub description: String,
    pub summary: String,
    pub market_id: Uuid,
}

/// POST /api/v1/properties/buildings
pub async fn create_building(
    State(state): State<AppState>,
    Json(payload): Json<CreateBuildingRequest>,
) -> ApiResult<Building> {
    let CreateBuildingRequest {
        name,
        description,
        summary,
        market_id,
    } = payload;

    let new = NewBuilding {
        name,
        description,
        summary,
    };

    match state.properties.create_building(&market_id, new).await {
        Ok(building) => Ok(Json(ApiResponse::success(building))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/buildings/{id}
pub async fn get_building(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Building> {
    match state.properties.find_one_building(&id).await {
        Ok(building) => Ok(Json(ApiResponse::success(building))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/properties/buildings/{id}
pub async fn update_building(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BuildingPatch>,
) -> ApiResult<Building> {
    match state.properties.update_building(&id, payload).await {
        Ok(building) => Ok(Json(ApiResponse::success(building))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/buildings/{id}
pub async fn delete_building(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    match state.properties.delete_building(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/buildings/{id}/shops
pub async fn list_shops(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<Shop>> {
    match state.properties.find_all_shops(&id).await {
        Ok(shops) => Ok(Json(ApiResponse::success(shops))),
        Err(err) => Err(failure(err)),
    }
}
