//! Domain services (business logic)

pub mod reporting;
pub mod employee_service;
pub mod compensation_service;

pub use reporting::compute_report_count;
pub use employee_service::EmployeeService;
pub use compensation_service::CompensationService;
