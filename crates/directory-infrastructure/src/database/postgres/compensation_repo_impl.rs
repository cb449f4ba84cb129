// ============================================================================
// Directory Infrastructure - PostgreSQL Compensation Repository
// File: crates/directory-infrastructure/src/database/postgres/compensation_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use sqlx::{FromRow, PgPool};
use tracing::info;

use directory_core::domain::Compensation;
use directory_core::error::DomainError;
use directory_core::repositories::CompensationRepository;

use super::db_error;

pub struct PgCompensationRepository {
    pool: PgPool,
    pending: Mutex<Vec<Compensation>>,
}

impl PgCompensationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pending: Mutex::new(Vec::new()),
        }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CompensationRow {
    pub id: String,
    pub employee_id: String,
    pub salary: f64,
    pub effective_date: DateTime<Utc>,
}

impl From<CompensationRow> for Compensation {
    fn from(row: CompensationRow) -> Self {
        Compensation {
            id: row.id,
            employee_id: row.employee_id,
            salary: row.salary,
            effective_date: row.effective_date,
        }
    }
}

#[async_trait]
impl CompensationRepository for PgCompensationRepository {
    async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Compensation>, DomainError> {
        let row: Option<CompensationRow> = sqlx::query_as(
            r#"
            SELECT id, employee_id, salary, effective_date
            FROM compensations
            WHERE employee_id = $1
            LIMIT 1
            "#
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding compensation by employee id", e))?;

        Ok(row.map(|r| r.into()))
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

        let mut tx = self.pool.begin().await.map_err(|e| db_error("beginning transaction", e))?;

        for compensation in &pending {
            sqlx::query(
                r#"
                INSERT INTO compensations (id, employee_id, salary, effective_date)
                VALUES ($1, $2, $3, $4)
                "#
            )
            .bind(&compensation.id)
            .bind(&compensation.employee_id)
            .bind(compensation.salary)
            .bind(compensation.effective_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("inserting compensation", e))?;
        }

        tx.commit().await.map_err(|e| db_error("committing compensations", e))?;

        info!("Committed {} compensation(s)", pending.len());
        Ok(())
    }
}
