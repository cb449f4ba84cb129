//! Compensation repository trait (port)

use async_trait::async_trait;
use crate::domain::Compensation;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompensationRepository: Send + Sync {
    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Compensation>, DomainError>;
    async fn add(&self, compensation: &Compensation) -> Result<Compensation, DomainError>;
    async fn save(&self) -> Result<(), DomainError>;
}
