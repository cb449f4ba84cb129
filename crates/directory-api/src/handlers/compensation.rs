// ============================================================================
// Directory API - Compensation Handlers
// File: crates/directory-api/src/handlers/compensation.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use directory_core::domain::{Compensation, CompensationDto};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create compensation - POST /api/compensations
pub async fn create_compensation(
    State(state): State<AppState>,
    Json(payload): Json<CompensationDto>,
) -> Result<(StatusCode, Json<ApiResponse<Compensation>>), ApiError> {
    info!("Received compensation create request for '{}'", payload.employee_id);

    let created = state.compensation_service().create(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Compensation by employee - GET /api/compensations/{employee_id}
pub async fn get_compensation(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<ApiResponse<Compensation>>, ApiError> {
    info!("Received compensation get request for '{}'", employee_id);

    let compensation = state
        .compensation_service()
        .get_by_employee_id(&employee_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Compensation with Employee Id {} not found.", employee_id))
        })?;

    Ok(Json(ApiResponse::success(compensation)))
}
