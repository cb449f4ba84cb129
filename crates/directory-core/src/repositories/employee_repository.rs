//! Employee repository trait (port)

use async_trait::async_trait;
use crate::domain::Employee;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Committed state only; staged changes are not visible here.
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError>;
    async fn add(&self, employee: &Employee) -> Result<Employee, DomainError>;
    async fn remove(&self, employee: &Employee) -> Result<Employee, DomainError>;
    async fn save(&self) -> Result<(), DomainError>;
}
