//! Repository traits (ports)
//!
//! A repository handle is a request-scoped session: `add` and `remove`
//! stage changes, `save` commits them. Nothing staged is visible to other
//! sessions until `save` succeeds, and a failed `save` discards the batch.

pub mod employee_repository;
pub mod compensation_repository;

pub use employee_repository::EmployeeRepository;
pub use compensation_repository::CompensationRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use compensation_repository::MockCompensationRepository;
