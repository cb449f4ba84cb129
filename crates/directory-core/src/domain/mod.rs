//! # Directory Core - Domain Module
//! 
//! Domain entities and input DTOs for the employee directory.

pub mod employee;
pub mod compensation;
pub mod reporting_structure;

// Re-export all entities and DTOs
pub use employee::{Employee, EmployeeDto};
pub use compensation::{Compensation, CompensationDto};
pub use reporting_structure::ReportingStructure;
