// ============================================================================
// Directory Core - Employee Service
// File: crates/directory-core/src/services/employee_service.rs
// ============================================================================
//! Employee create/read/replace and reporting structure lookups

use std::sync::Arc;
use tracing::{info, warn, error};

use directory_shared::types::is_blank;

use crate::domain::{Employee, EmployeeDto, ReportingStructure};
use crate::error::DomainError;
use crate::repositories::EmployeeRepository;
use crate::services::reporting::compute_report_count;

/// Employee service, built per request around a repository session
pub struct EmployeeService<R: EmployeeRepository + ?Sized> {
    employee_repo: Arc<R>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }

    /// Create an employee. Every direct report must already exist.
    pub async fn create(&self, dto: &EmployeeDto) -> Result<Employee, DomainError> {
        info!("Creating employee: {} {}", dto.first_name, dto.last_name);

        let employee = self.map_dto_to_employee(dto).await?;

        let created = self.employee_repo.add(&employee).await?;
        self.employee_repo.save().await?;

        info!("Employee created successfully: {} ({})", created.full_name(), created.id);
        Ok(created)
    }

    /// Get an employee by id. A blank id is treated as absent.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        if is_blank(id) {
            return Ok(None);
        }

        self.employee_repo.find_by_id(id).await
    }

    /// Resolve the employee and count all of their transitive reports.
    /// `None` when the employee does not exist.
    pub async fn get_reporting_structure(&self, id: &str) -> Result<Option<ReportingStructure>, DomainError> {
        let employee = match self.get_by_id(id).await? {
            Some(employee) => employee,
            None => return Ok(None),
        };

        let number_of_reports = compute_report_count(self.employee_repo.as_ref(), &employee).await?;

        Ok(Some(ReportingStructure {
            employee,
            number_of_reports,
        }))
    }

    /// Replace the employee stored under `original_id` with one built from `dto`.
    ///
    /// The original is removed and committed before the new record is built,
    /// so a concurrent reader sees the id as absent until the new record (or
    /// the restored original) is committed. If anything after the removal
    /// fails, the original is written back and the first error is returned.
    pub async fn replace(&self, original_id: &str, dto: &EmployeeDto) -> Result<Employee, DomainError> {
        info!("Replacing employee: {}", original_id);

        // 1. Resolve the original
        let original = self.get_by_id(original_id).await?.ok_or_else(|| {
            warn!("Replace failed: employee not found: {}", original_id);
            DomainError::EmployeeNotFound(original_id.to_string())
        })?;

        // 2. Remove and commit
        self.employee_repo.remove(&original).await?;
        self.employee_repo.save().await?;

        // 3-5. Build, keep identity, add and commit
        match self.add_replacement(original_id, dto).await {
            Ok(replaced) => {
                info!("Employee replaced successfully: {}", replaced.id);
                Ok(replaced)
            }
            Err(e) => {
                warn!("Replace failed for {}: {}; restoring original", original_id, e);
                self.restore(&original).await;
                Err(e)
            }
        }
    }

    async fn add_replacement(&self, original_id: &str, dto: &EmployeeDto) -> Result<Employee, DomainError> {
        let mut employee = self.map_dto_to_employee(dto).await?;
        employee.id = original_id.to_string();

        let replaced = self.employee_repo.add(&employee).await?;
        self.employee_repo.save().await?;

        Ok(replaced)
    }

    /// Compensating write for a failed replace. Failures are logged only;
    /// the caller already has an error to return.
    async fn restore(&self, original: &Employee) {
        let restored = async {
            self.employee_repo.add(original).await?;
            self.employee_repo.save().await
        }
        .await;

        match restored {
            Ok(()) => info!("Original employee restored: {}", original.id),
            Err(e) => error!("Failed to restore employee {}: {}", original.id, e),
        }
    }

    /// Build a new entity from the payload, resolving each direct report.
    async fn map_dto_to_employee(&self, dto: &EmployeeDto) -> Result<Employee, DomainError> {
        let mut direct_reports = Vec::with_capacity(dto.direct_report_ids.len());

        for id in &dto.direct_report_ids {
            let report = self.get_by_id(id).await?.ok_or_else(|| {
                warn!("Direct report not found: {}", id);
                DomainError::DirectReportNotFound(id.clone())
            })?;
            direct_reports.push(report.id);
        }

        Ok(Employee::new(
            dto.first_name.clone(),
            dto.last_name.clone(),
            dto.position.clone(),
            dto.department.clone(),
            direct_reports,
        ))
    }
}
