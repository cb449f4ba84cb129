use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::error;

use directory_core::domain::Compensation;
use directory_core::error::DomainError;
use directory_core::repositories::CompensationRepository;

use super::Tables;

#[derive(Debug)]
pub struct InMemoryCompensationRepository {
    tables: Arc<RwLock<Tables>>,
    pending: Mutex<Vec<Compensation>>,
}

impl InMemoryCompensationRepository {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self {
            tables,
            pending: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompensationRepository for InMemoryCompensationRepository {
    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Compensation>, DomainError> {
        Ok(self
            .tables
            .read()
            .compensations
            .values()
            .find(|c| c.employee_id == employee_id)
            .cloned())
    }

    async fn add(&self, compensation: &Compensation) -> Result<Compensation, DomainError> {
        self.pending.lock().push(compensation.clone());
        Ok(compensation.clone())
    }

    async fn save(&self) -> Result<(), DomainError> {
        let pending = std::mem::take(&mut *self.pending.lock());
        if pending.is_empty() {
            return Ok(());
        }

        let mut tables = self.tables.write();
        if let Some(dup) = pending.iter().find(|c| tables.compensations.contains_key(&c.id)) {
            error!("Duplicate compensation id on save: {}", dup.id);
            return Err(DomainError::DatabaseError(format!(
                "compensation {} already exists",
                dup.id
            )));
        }

        for compensation in pending {
            tables.compensations.insert(compensation.id.clone(), compensation);
        }
        Ok(())
    }
}
