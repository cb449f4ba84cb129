// ============================================================================
// Directory Core - Employee Entity
// File: crates/directory-core/src/domain/employee.rs
// Description: Employee entity and its create/replace payload
// ============================================================================

use directory_shared::types::{new_id, EntityId};
use serde::{Deserialize, Serialize};

/// Employee entity
///
/// `direct_reports` holds ids of other employees, in the order they were
/// given. They are references, not owned records: removing a manager never
/// touches its reports, and every traversal re-resolves them through the
/// repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub direct_reports: Vec<EntityId>,
}

impl Employee {
    pub fn new(
        first_name: String,
        last_name: String,
        position: String,
        department: String,
        direct_reports: Vec<EntityId>,
    ) -> Self {
        Self {
            id: new_id(),
            first_name,
            last_name,
            position,
            department,
            direct_reports,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_direct_reports(&self) -> bool {
        !self.direct_reports.is_empty()
    }
}

/// Payload for creating or replacing an employee
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub direct_report_ids: Vec<EntityId>,
}
