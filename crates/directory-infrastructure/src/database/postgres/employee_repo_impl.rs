// ============================================================================
// Directory Infrastructure - PostgreSQL Employee Repository
// File: crates/directory-infrastructure/src/database/postgres/employee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use parking_lot::Mutex;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use tracing::{debug, info};

use directory_core::domain::Employee;
use directory_core::error::DomainError;
use directory_core::repositories::EmployeeRepository;

use super::db_error;

enum PendingChange {
    Add(Employee),
    Remove(String),
}

/// Request-scoped employee session over a shared pool. Changes are buffered
/// and written in one transaction on `save`.
pub struct PgEmployeeRepository {
    pool: PgPool,
    pending: Mutex<Vec<PendingChange>>,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            pending: Mutex::new(Vec::new()),
        }
    }

    async fn insert(tx: &mut Transaction<'_, Postgres>, employee: &Employee) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, position, department)
            VALUES ($1, $2, $3, $4, $5)
            "#
        )
        .bind(&employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.position)
        .bind(&employee.department)
        .execute(&mut **tx)
        .await
        .map_err(|e| db_error("inserting employee", e))?;

        for (ordinal, report_id) in employee.direct_reports.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO employee_direct_reports (manager_id, ordinal, report_id)
                VALUES ($1, $2, $3)
                "#
            )
            .bind(&employee.id)
            .bind(ordinal_column(ordinal)?)
            .bind(report_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| db_error("inserting direct report", e))?;
        }

        Ok(())
    }

    async fn delete(tx: &mut Transaction<'_, Postgres>, id: &str) -> Result<(), DomainError> {
        // Direct-report rows owned by this manager go with it (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await
            .map_err(|e| db_error("deleting employee", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::DatabaseError(format!(
                "employee {} was already removed",
                id
            )));
        }

        Ok(())
    }
}

/// Position of a direct report, as stored in the INTEGER `ordinal` column
fn ordinal_column(ordinal: usize) -> Result<i32, DomainError> {
    i32::try_from(ordinal).map_err(|_| {
        DomainError::DatabaseError(format!("direct report position {} is out of range", ordinal))
    })
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct EmployeeRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            department: row.department,
            direct_reports: row.direct_reports,
        }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT
                e.id, e.first_name, e.last_name, e.position, e.department,
                COALESCE(
                    array_agg(r.report_id ORDER BY r.ordinal) FILTER (WHERE r.report_id IS NOT NULL),
                    '{}'::text[]
                ) AS direct_reports
            FROM employees e
            LEFT JOIN employee_direct_reports r ON r.manager_id = e.id
            WHERE e.id = $1
            GROUP BY e.id
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding employee by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn add(&self, employee: &Employee) -> Result<Employee, DomainError> {
        debug!("Staging employee add: {}", employee.id);
        self.pending.lock().push(PendingChange::Add(employee.clone()));
        Ok(employee.clone())
    }

    async fn remove(&self, employee: &Employee) -> Result<Employee, DomainError> {
        debug!("Staging employee remove: {}", employee.id);
        self.pending.lock().push(PendingChange::Remove(employee.id.clone()));
        Ok(employee.clone())
    }

    async fn save(&self) -> Result<(), DomainError> {
        let changes = std::mem::take(&mut *self.pending.lock());
        if changes.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(|e| db_error("beginning transaction", e))?;

        for change in &changes {
            match change {
                PendingChange::Add(employee) => Self::insert(&mut tx, employee).await?,
                PendingChange::Remove(id) => Self::delete(&mut tx, id).await?,
            }
        }

        tx.commit().await.map_err(|e| db_error("committing employees", e))?;

        info!("Committed {} employee change(s)", changes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_column_in_range() {
        assert_eq!(ordinal_column(0), Ok(0));
        assert_eq!(ordinal_column(i32::MAX as usize), Ok(i32::MAX));
    }

    #[test]
    fn test_ordinal_column_rejects_overflow() {
        let err = ordinal_column(i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
