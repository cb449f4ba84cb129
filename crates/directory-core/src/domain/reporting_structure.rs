//! Reporting structure (computed, never persisted)

use serde::{Deserialize, Serialize};

use super::Employee;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingStructure {
    pub employee: Employee,
    /// Every employee reachable through the direct-report graph.
    pub number_of_reports: usize,
}
