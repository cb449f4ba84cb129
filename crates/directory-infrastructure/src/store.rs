//! Backend selection and per-request repository sessions

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use directory_core::repositories::{CompensationRepository, EmployeeRepository};
use directory_shared::config::{DatabaseBackend, DatabaseSettings};

use crate::database::{create_pool, PgCompensationRepository, PgEmployeeRepository};
use crate::error::StoreError;
use crate::memory::InMemoryStore;

/// Shared handle to the configured backend. Cheap to clone; hand out a fresh
/// pair of repositories for every unit of work.
#[derive(Clone)]
pub enum Store {
    Memory(InMemoryStore),
    Postgres(PgPool),
}

impl Store {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        match settings.backend {
            DatabaseBackend::Memory => {
                info!("Using in-memory record store");
                Ok(Store::Memory(InMemoryStore::new()))
            }
            DatabaseBackend::Postgres => {
                let url = settings.url.as_deref().ok_or(StoreError::MissingDatabaseUrl)?;
                let pool = create_pool(url, settings.max_connections).await?;
                info!("Database connection established.");
                Ok(Store::Postgres(pool))
            }
        }
    }

    pub fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        match self {
            Store::Memory(store) => Arc::new(store.employee_repository()),
            Store::Postgres(pool) => Arc::new(PgEmployeeRepository::new(pool.clone())),
        }
    }

    pub fn compensation_repository(&self) -> Arc<dyn CompensationRepository> {
        match self {
            Store::Memory(store) => Arc::new(store.compensation_repository()),
            Store::Postgres(pool) => Arc::new(PgCompensationRepository::new(pool.clone())),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Memory(_) => "memory",
            Store::Postgres(_) => "postgres",
        }
    }
}
