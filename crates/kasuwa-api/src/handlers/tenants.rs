//! Tenant HTTP handlers

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use kasuwa_core::domain::{NewTenant, Tenant, TenantPatch};

use crate::response::{failure, ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /api/v1/tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(payload): Json<NewTenant>,
) -> ApiResult<Tenant> {
    match state.tenants.create_tenant(payload).await {
        Ok(tenant) => Ok(Json(ApiResponse::success(tenant))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/tenants
pub async fn list_tenants(State(state): State<AppState>) -> ApiResult<Vec<Tenant>> {
    match state.tenants.get_all().await {
        Ok(tenants) => Ok(Json(ApiResponse::success(tenants))),
        Err(err) => Err(failure(err)),
    }
}

/// GET /api/v1/tenants/{id}
pub async fn get_tenant(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Tenant> {
    match state.tenants.get_by_id(&id).await {
        Ok(tenant) => Ok(Json(ApiResponse::success(tenant))),
        Err(err) => Err(failure(err)),
    }
}

/// PATCH /api/v1/tenants/{id}
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TenantPatch>,
) -> ApiResult<Tenant> {
    match state.tenants.update(&id, payload).await {
        Ok(tenant) => Ok(Json(ApiResponse::success(tenant))),
        Err(err) => Err(failure(err)),
    }
}

/// DELETE /api/v1/tenants/{id}
pub async fn delete_tenant(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    match state.tenants.remove(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(err) => Err(failure(err)),
    }
}
