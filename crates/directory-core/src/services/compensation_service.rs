// ============================================================================
// Directory Core - Compensation Service
// File: crates/directory-core/src/services/compensation_service.rs
// ============================================================================
//! Compensation create/read. One compensation per employee, checked at creation.

use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::domain::{Compensation, CompensationDto};
use crate::error::DomainError;
use crate::repositories::{CompensationRepository, EmployeeRepository};

pub struct CompensationService<C, E>
where
    C: CompensationRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
{
    compensation_repo: Arc<C>,
    employee_repo: Arc<E>,
}

impl<C, E> CompensationService<C, E>
where
    C: CompensationRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
{
    pub fn new(compensation_repo: Arc<C>, employee_repo: Arc<E>) -> Self {
        Self {
            compensation_repo,
            employee_repo,
        }
    }

    /// Create the compensation for an employee that has none yet
    pub async fn create(&self, dto: &CompensationDto) -> Result<Compensation, DomainError> {
        info!("Creating compensation for employee: {}", dto.employee_id);

        // 0. Validate payload
        dto.validate().map_err(|e| {
            warn!("Invalid compensation payload: {}", e);
            DomainError::from(e)
        })?;

        // 1. Employee must exist
        self.ensure_employee_exists(&dto.employee_id).await?;

        // 2. At most one compensation per employee
        if self.compensation_repo.find_by_employee_id(&dto.employee_id).await?.is_some() {
            warn!("Compensation already exists for employee: {}", dto.employee_id);
            return Err(DomainError::CompensationAlreadyExists(dto.employee_id.clone()));
        }

        // 3. Persist
        let compensation = Compensation::new(dto.employee_id.clone(), dto.salary, dto.effective_date);
        let created = self.compensation_repo.add(&compensation).await?;
        self.compensation_repo.save().await?;

        info!("Compensation created successfully: {}", created.id);
        Ok(created)
    }

    /// `Err(EmployeeNotFound)` for an unknown employee, `Ok(None)` for a known
    /// employee without compensation.
    pub async fn get_by_employee_id(&self, employee_id: &str) -> Result<Option<Compensation>, DomainError> {
        self.ensure_employee_exists(employee_id).await?;
        self.compensation_repo.find_by_employee_id(employee_id).await
    }

    async fn ensure_employee_exists(&self, employee_id: &str) -> Result<(), DomainError> {
        if self.employee_repo.find_by_id(employee_id).await?.is_none() {
            warn!("Employee not found: {}", employee_id);
            return Err(DomainError::EmployeeNotFound(employee_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Employee;
    use crate::repositories::{MockCompensationRepository, MockEmployeeRepository};
    use chrono::{TimeZone, Utc};

    fn dto(employee_id: &str, salary: f64) -> CompensationDto {
        CompensationDto {
            employee_id: employee_id.to_string(),
            salary,
            effective_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    fn employees_with(id: &'static str) -> MockEmployeeRepository {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_find_by_id().returning(move |requested| {
            Ok((requested == id).then(|| Employee {
                id: id.to_string(),
                first_name: "Paul".to_string(),
                last_name: "McCartney".to_string(),
                position: "Developer I".to_string(),
                department: "Engineering".to_string(),
                direct_reports: vec![],
            }))
        });
        repo
    }

    #[tokio::test]
    async fn test_create_persists_with_fresh_id() {
        let mut compensations = MockCompensationRepository::new();
        compensations.expect_find_by_employee_id().returning(|_| Ok(None));
        compensations.expect_add().times(1).returning(|c| Ok(c.clone()));
        compensations.expect_save().times(1).returning(|| Ok(()));

        let service = CompensationService::new(Arc::new(compensations), Arc::new(employees_with("paul")));
        let created = service.create(&dto("paul", 85_000.0)).await.unwrap();

        assert_eq!(created.employee_id, "paul");
        assert_eq!(created.salary, 85_000.0);
        assert_eq!(created.effective_date, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert!(!created.id.is_empty());
        assert_ne!(created.id, created.employee_id);
    }

    #[tokio::test]
    async fn test_negative_salary_rejected_before_store_access() {
        let mut compensations = MockCompensationRepository::new();
        compensations.expect_find_by_employee_id().never();
        compensations.expect_add().never();
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_id().never();

        let service = CompensationService::new(Arc::new(compensations), Arc::new(employees));
        let err = service.create(&dto("paul", -5.0)).await.unwrap_err();

        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_unknown_employee_not_found() {
        let mut compensations = MockCompensationRepository::new();
        compensations.expect_add().never();

        let service = CompensationService::new(Arc::new(compensations), Arc::new(employees_with("paul")));
        let err = service.create(&dto("george", 10.0)).await.unwrap_err();

        assert_eq!(err, DomainError::EmployeeNotFound("george".to_string()));
    }

    #[tokio::test]
    async fn test_existing_compensation_conflicts() {
        let mut compensations = MockCompensationRepository::new();
        compensations
            .expect_find_by_employee_id()
            .returning(|id| Ok(Some(Compensation::new(id.to_string(), 1.0, Utc::now()))));
        compensations.expect_add().never();
        compensations.expect_save().never();

        let service = CompensationService::new(Arc::new(compensations), Arc::new(employees_with("paul")));
        let err = service.create(&dto("paul", 10.0)).await.unwrap_err();

        assert_eq!(err, DomainError::CompensationAlreadyExists("paul".to_string()));
    }

    #[tokio::test]
    async fn test_get_for_employee_without_compensation_is_none() {
        let mut compensations = MockCompensationRepository::new();
        compensations.expect_find_by_employee_id().returning(|_| Ok(None));

        let service = CompensationService::new(Arc::new(compensations), Arc::new(employees_with("paul")));

        assert!(service.get_by_employee_id("paul").await.unwrap().is_none());
        assert_eq!(
            service.get_by_employee_id("ringo").await.unwrap_err(),
            DomainError::EmployeeNotFound("ringo".to_string())
        );
    }
}
