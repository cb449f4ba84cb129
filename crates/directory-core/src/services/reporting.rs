// ============================================================================
// Directory Core - Reporting Structure Calculator
// File: crates/directory-core/src/services/reporting.rs
// ============================================================================
//! Transitive report counting over the direct-report graph.
//!
//! Every report is re-fetched from the repository as the walk reaches it,
//! so the count reflects committed state at the time of the call rather than
//! whatever copy the caller is holding. There is no caching between calls.

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, warn};

use crate::domain::Employee;
use crate::error::DomainError;
use crate::repositories::EmployeeRepository;

/// Count every employee reachable from `employee` through direct-report edges.
///
/// * no direct reports: `0`
/// * otherwise: the number of direct reports, plus the count of each report
///   as re-read from the repository
/// * a report id that no longer resolves still counts as its own edge but
///   contributes nothing below it
/// * an id that reappears on the current path fails with
///   [`DomainError::CycleDetected`]; the same employee reached through two
///   different managers is not a cycle and is counted on each path
pub async fn compute_report_count<R>(repo: &R, employee: &Employee) -> Result<usize, DomainError>
where
    R: EmployeeRepository + ?Sized,
{
    let mut path = vec![employee.id.clone()];
    let total = count_reports(repo, employee, &mut path).await?;
    debug!("Employee {} has {} total reports", employee.id, total);
    Ok(total)
}

fn count_reports<'a, R>(
    repo: &'a R,
    employee: &'a Employee,
    path: &'a mut Vec<String>,
) -> BoxFuture<'a, Result<usize, DomainError>>
where
    R: EmployeeRepository + ?Sized + 'a,
{
    async move {
        if !employee.has_direct_reports() {
            return Ok(0);
        }

        let mut total = employee.direct_reports.len();

        for report_id in &employee.direct_reports {
            if path.iter().any(|id| id == report_id) {
                warn!("Reporting cycle through {} (path: {:?})", report_id, path);
                return Err(DomainError::CycleDetected(report_id.clone()));
            }

            let report = match repo.find_by_id(report_id).await? {
                Some(report) => report,
                None => {
                    // Removed since the manager's list was written.
                    warn!("Direct report {} of {} no longer exists; skipping branch", report_id, employee.id);
                    continue;
                }
            };

            path.push(report.id.clone());
            total += count_reports(repo, &report, path).await?;
            path.pop();
        }

        Ok(total)
    }
    .boxed()
}
