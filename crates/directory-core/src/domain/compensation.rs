// ============================================================================
// Directory Core - Compensation Entity
// File: crates/directory-core/src/domain/compensation.rs
// Description: Compensation entity, one per employee
// ============================================================================

use chrono::{DateTime, Utc};
use directory_shared::types::{is_blank, new_id, EntityId};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Compensation entity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    pub id: EntityId,
    pub employee_id: EntityId,
    pub salary: f64,
    pub effective_date: DateTime<Utc>,
}

impl Compensation {
    pub fn new(employee_id: EntityId, salary: f64, effective_date: DateTime<Utc>) -> Self {
        Self {
            id: new_id(),
            employee_id,
            salary,
            effective_date,
        }
    }
}

/// Payload for creating a compensation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompensationDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_id: EntityId,

    #[validate(custom(function = "validate_salary"))]
    pub salary: f64,

    pub effective_date: DateTime<Utc>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        let mut err = ValidationError::new("blank");
        err.message = Some("Employee Id is required".into());
        return Err(err);
    }
    Ok(())
}

fn validate_salary(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        let mut err = ValidationError::new("salary");
        err.message = Some("Salary must be 0 or greater".into());
        return Err(err);
    }
    Ok(())
}
