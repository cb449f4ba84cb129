//! In-memory record store
//!
//! Committed tables live behind one shared lock; each repository handle is a
//! session that stages changes until `save`. A batch is applied under the write
//! lock; if any change fails, the ones already applied are undone in reverse.

mod employee_repo_impl;
mod compensation_repo_impl;

pub use employee_repo_impl::InMemoryEmployeeRepository;
pub use compensation_repo_impl::InMemoryCompensationRepository;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use directory_core::domain::{Compensation, Employee};

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub employees: HashMap<String, Employee>,
    /// keyed by compensation id
    pub compensations: HashMap<String, Compensation>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_repository(&self) -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::new(self.tables.clone())
    }

    pub fn compensation_repository(&self) -> InMemoryCompensationRepository {
        InMemoryCompensationRepository::new(self.tables.clone())
    }

    pub fn employee_count(&self) -> usize {
        self.tables.read().employees.len()
    }

    pub fn compensation_count_for(&self, employee_id: &str) -> usize {
        self.tables
            .read()
            .compensations
            .values()
            .filter(|c| c.employee_id == employee_id)
            .count()
    }
}
