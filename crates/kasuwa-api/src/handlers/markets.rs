//! Market HTTP handlers

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use kasuwa_core::domain::{Building, Market, MarketPatch, NewMarket, Stall};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/v1/properties/markets
pub async fn create_market(
    State(state): State<AppState>,
    Json(payload): Json<NewMarket>,
) -> ApiResult<Market> {
    match state.properties.create_market(payload).await {
        Ok(market) => Ok(Json(ApiResponse::success(market))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/markets
pub async fn list_markets(State(state): State<AppState>) -> ApiResult<Vec<Market>> {
    match state.properties.find_all_markets().await {
        Ok(markets) => Ok(Json(ApiResponse::success(markets))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/markets/{id}
pub async fn get_market(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Market> {
    match state.properties.find_one_market(&id).await {
        Ok(market) => Ok(Json(ApiResponse::success(market))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/properties/markets/{id}
pub async fn update_market(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MarketPatch>,
) -> ApiResult<Market> {
    match state.properties.update_market(&id, payload).await {
        Ok(market) => Ok(Json(ApiResponse::success(market))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/properties/markets/{id}
pub async fn delete_market(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    match state.properties.delete_market(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/markets/{id}/buildings
pub async fn list_buildings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<Building>> {
    match state.properties.find_all_buildings(&id).await {
        Ok(buildings) => Ok(Json(ApiResponse::success(buildings))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/properties/markets/{id}/stalls
pub async fn list_stalls(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Vec<Stall>> {
    match state.properties.find_all_stalls(&id).await {
        Ok(stalls) => Ok(Json(ApiResponse::success(stalls))),
        Err(err) => Err(failure(err)),
    }
}
