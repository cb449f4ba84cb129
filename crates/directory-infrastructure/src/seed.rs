// ============================================================================
// Directory Infrastructure - Employee Seeder
// File: crates/directory-infrastructure/src/seed.rs
// ============================================================================
//! Loads a JSON array of employees into the store at startup.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, warn};

use directory_core::domain::Employee;

use crate::error::StoreError;
use crate::store::Store;

/// Seed the store from `path`. Employees whose id already exists are left
/// alone, so running twice is harmless. Returns how many were inserted.
pub async fn seed_employees(store: &Store, path: &Path) -> Result<usize, StoreError> {
    info!("Seeding employees from {}", path.display());
    let raw = tokio::fs::read_to_string(path).await?;
    let employees: Vec<Employee> = serde_json::from_str(&raw)?;
    seed_from(store, employees).await
}

pub(crate) async fn seed_from(store: &Store, employees: Vec<Employee>) -> Result<usize, StoreError> {
    let repo = store.employee_repository();
    let ordered = order_reports_first(employees)?;

    let mut known: HashSet<String> = HashSet::new();
    let mut inserted = 0;

    for employee in ordered {
        for report_id in &employee.direct_reports {
            if !known.contains(report_id) && repo.find_by_id(report_id).await?.is_none() {
                return Err(StoreError::InvalidSeed(format!(
                    "employee {} lists unknown direct report {}",
                    employee.id, report_id
                )));
            }
        }

        known.insert(employee.id.clone());

        if repo.find_by_id(&employee.id).await?.is_some() {
            warn!("Seed employee {} already present; skipping", employee.id);
            continue;
        }

        repo.add(&employee).await?;
        inserted += 1;
    }

    repo.save().await?;
    info!("Seeded {} employee(s)", inserted);
    Ok(inserted)
}

/// Depth-first post-order so every report lands before its manager.
fn order_reports_first(employees: Vec<Employee>) -> Result<Vec<Employee>, StoreError> {
    let mut by_id: HashMap<String, Employee> = HashMap::with_capacity(employees.len());
    let mut input_order = Vec::with_capacity(employees.len());

    for employee in employees {
        if by_id.contains_key(&employee.id) {
            return Err(StoreError::InvalidSeed(format!("duplicate employee id {}", employee.id)));
        }
        input_order.push(employee.id.clone());
        by_id.insert(employee.id.clone(), employee);
    }

    let mut ordered = Vec::with_capacity(by_id.len());
    let mut done: HashSet<String> = HashSet::new();
    let mut in_progress: HashSet<String> = HashSet::new();

    fn visit(
        id: &str,
        by_id: &HashMap<String, Employee>,
        done: &mut HashSet<String>,
        in_progress: &mut HashSet<String>,
        ordered: &mut Vec<Employee>,
    ) -> Result<(), StoreError> {
        if done.contains(id) {
            return Ok(());
        }
        let Some(employee) = by_id.get(id) else {
            // Outside the seed set; checked against the store later.
            return Ok(());
        };
        if !in_progress.insert(id.to_string()) {
            return Err(StoreError::InvalidSeed(format!("reporting cycle through {}", id)));
        }

        for report_id in &employee.direct_reports {
            visit(report_id, by_id, done, in_progress, ordered)?;
        }

        in_progress.remove(id);
        done.insert(id.to_string());
        ordered.push(employee.clone());
        Ok(())
    }

    for id in &input_order {
        visit(id, &by_id, &mut done, &mut in_progress, &mut ordered)?;
    }

    Ok(ordered)
}
