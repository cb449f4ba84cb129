// ============================================================================
// Directory API - Employee Handlers
// File: crates/directory-api/src/handlers/employee.rs
// ============================================================================
//! Employee HTTP handlers (create, get, reporting structure, replace)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use directory_core::domain::{Employee, EmployeeDto, ReportingStructure};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create employee - POST /api/employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeDto>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    info!("Received employee create request for '{} {}'", payload.first_name, payload.last_name);

    let created = state.employee_service().create(&payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// Get employee - GET /api/employee/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    info!("Received employee get request for '{}'", id);

    let employee = state
        .employee_service()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee with Id {} not found.", id)))?;

    Ok(Json(ApiResponse::success(employee)))
}

/// Reporting structure - GET /api/employee/reportingStructure/{id}
pub async fn get_reporting_structure(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportingStructure>>, ApiError> {
    info!("Received reporting structure request for '{}'", id);

    let structure = state
        .employee_service()
        .get_reporting_structure(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee with Id {} not found.", id)))?;

    Ok(Json(ApiResponse::success(structure)))
}

/// Replace employee - PUT /api/employee/{id}
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeDto>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    info!("Received employee replace request for '{}'", id);

    let replaced = state.employee_service().replace(&id, &payload).await?;

    Ok(Json(ApiResponse::success(replaced)))
}
