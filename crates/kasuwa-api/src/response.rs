//! API Response wrapper

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use kasuwa_core::DomainError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

/// Maps the domain error taxonomy onto HTTP statuses.
pub fn failure(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = match &err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DomainError::InvalidReference { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REFERENCE")
        }
        DomainError::ContactNumberAlreadyExists(_) => {
            (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION")
        }
        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        DomainError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_FAILURE"),
    };
    (status, Json(ApiResponse::error(code, &err.to_string())))
}
