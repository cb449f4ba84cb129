//! PostgreSQL repository implementations

pub mod employee_repo_impl;
pub mod compensation_repo_impl;

pub use employee_repo_impl::PgEmployeeRepository;
pub use compensation_repo_impl::PgCompensationRepository;

use directory_core::DomainError;
use tracing::error;

pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}
