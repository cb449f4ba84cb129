use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, error};

use directory_core::domain::Employee;
use directory_core::error::DomainError;
use directory_core::repositories::EmployeeRepository;

use super::Tables;

#[derive(Debug)]
enum PendingChange {
    Add(Employee),
    Remove(String),
}

#[derive(Debug)]
pub struct InMemoryEmployeeRepository {
    tables: Arc<RwLock<Tables>>,
    pending: Mutex<Vec<PendingChange>>,
}

impl InMemoryEmployeeRepository {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self {
            tables,
            pending: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        Ok(self.tables.read().employees.get(id).cloned())
    }

    async fn add(&self, employee: &Employee) -> Result<Employee, DomainError> {
        self.pending.lock().push(PendingChange::Add(employee.clone()));
        Ok(employee.clone())
    }

    async fn remove(&self, employee: &Employee) -> Result<Employee, DomainError> {
        self.pending.lock().push(PendingChange::Remove(employee.id.clone()));
        Ok(employee.clone())
    }

    async fn save(&self) -> Result<(), DomainError> {
        let changes = std::mem::take(&mut *self.pending.lock());
        if changes.is_empty() {
            return Ok(());
        }

        let mut tables = self.tables.write();
        let employees = &mut tables.employees;
        let mut undo = Vec::with_capacity(changes.len());

        for change in changes {
            match change {
                PendingChange::Add(employee) => {
                    if employees.contains_key(&employee.id) {
                        error!("Duplicate employee id on save: {}", employee.id);
                        rollback(employees, undo);
                        return Err(DomainError::DatabaseError(format!(
                            "employee {} already exists",
                            employee.id
                        )));
                    }
                    debug!("Committing employee add: {}", employee.id);
                    undo.push(Undo::Inserted(employee.id.clone()));
                    employees.insert(employee.id.clone(), employee);
                }
                PendingChange::Remove(id) => match employees.remove(&id) {
                    Some(removed) => {
                        debug!("Committing employee remove: {}", id);
                        undo.push(Undo::Removed(removed));
                    }
                    None => {
                        error!("Employee removed twice on save: {}", id);
                        rollback(employees, undo);
                        return Err(DomainError::DatabaseError(format!(
                            "employee {} was already removed",
                            id
                        )));
                    }
                },
            }
        }

        Ok(())
    }
}

/// Inverse of one applied change
enum Undo {
    Inserted(String),
    Removed(Employee),
}

fn rollback(employees: &mut HashMap<String, Employee>, undo: Vec<Undo>) {
    for step in undo.into_iter().rev() {
        match step {
            Undo::Inserted(id) => {
                employees.remove(&id);
            }
            Undo::Removed(employee) => {
                employees.insert(employee.id.clone(), employee);
            }
        }
    }
}
