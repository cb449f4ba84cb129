//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Employee with Id {0} not found.")]
    EmployeeNotFound(String),

    #[error("Direct Report with Id {0} not found.")]
    DirectReportNotFound(String),

    #[error("Compensation already exists for Employee with Id {0}")]
    CompensationAlreadyExists(String),

    #[error("Reporting cycle detected at Employee with Id {0}")]
    CycleDetected(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
