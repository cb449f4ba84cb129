//! PostgreSQL session behaviour
//!
//! Needs a reachable database; run with
//! `DIRECTORY_TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.

use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use directory_core::domain::{Compensation, Employee};
use directory_core::error::DomainError;
use directory_core::repositories::{CompensationRepository, EmployeeRepository};
use directory_infrastructure::{create_pool, PgCompensationRepository, PgEmployeeRepository};

async fn pool() -> PgPool {
    let url = std::env::var("DIRECTORY_TEST_DATABASE_URL")
        .expect("DIRECTORY_TEST_DATABASE_URL must be set for postgres tests");
    let pool = create_pool(&url, 2).await.unwrap();
    sqlx::raw_sql(include_str!("../sql/schema.sql"))
        .execute(&pool)
        .await
        .unwrap();
    pool
}

fn employee(first_name: &str, reports: &[&Employee]) -> Employee {
    Employee::new(
        first_name.to_string(),
        "Starr".to_string(),
        "Developer V".to_string(),
        "Engineering".to_string(),
        reports.iter().map(|r| r.id.clone()).collect(),
    )
}

#[tokio::test]
#[ignore]
async fn batch_commits_with_direct_reports_in_order() {
    let pool = pool().await;
    let session = PgEmployeeRepository::new(pool.clone());

    let paul = employee("Paul", &[]);
    let ringo = employee("Ringo", &[]);
    let john = employee("John", &[&ringo, &paul]);
    for e in [&paul, &ringo, &john] {
        session.add(e).await.unwrap();
    }

    // nothing visible before commit
    let reader = PgEmployeeRepository::new(pool.clone());
    assert!(reader.find_by_id(&john.id).await.unwrap().is_none());

    session.save().await.unwrap();

    let stored = reader.find_by_id(&john.id).await.unwrap().unwrap();
    assert_eq!(stored, john);
    assert_eq!(stored.direct_reports, vec![ringo.id.clone(), paul.id.clone()]);
    assert!(reader.find_by_id(&paul.id).await.unwrap().unwrap().direct_reports.is_empty());
}

#[tokio::test]
#[ignore]
async fn failed_save_rolls_back_and_discards_batch() {
    let pool = pool().await;
    let session = PgEmployeeRepository::new(pool.clone());

    let george = employee("George", &[]);
    session.add(&george).await.unwrap();
    session.save().await.unwrap();

    let pete = employee("Pete", &[]);
    session.add(&pete).await.unwrap();
    session.add(&george).await.unwrap();
    let err = session.save().await.unwrap_err();
    assert!(matches!(err, DomainError::DatabaseError(_)));

    assert!(session.find_by_id(&pete.id).await.unwrap().is_none());

    // the failed batch is gone; a fresh save commits nothing
    session.save().await.unwrap();
    assert!(session.find_by_id(&pete.id).await.unwrap().is_none());
    assert_eq!(session.find_by_id(&george.id).await.unwrap(), Some(george));
}

#[tokio::test]
#[ignore]
async fn remove_then_add_replaces_record_and_reports() {
    let pool = pool().await;
    let session = PgEmployeeRepository::new(pool.clone());

    let paul = employee("Paul", &[]);
    let john = employee("John", &[&paul]);
    session.add(&paul).await.unwrap();
    session.add(&john).await.unwrap();
    session.save().await.unwrap();

    let mut replacement = employee("Johnny", &[]);
    replacement.id = john.id.clone();
    session.remove(&john).await.unwrap();
    session.add(&replacement).await.unwrap();
    session.save().await.unwrap();

    let stored = session.find_by_id(&john.id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Johnny");
    assert!(stored.direct_reports.is_empty());
}

#[tokio::test]
#[ignore]
async fn compensation_is_found_by_employee_id() {
    let pool = pool().await;
    let employees = PgEmployeeRepository::new(pool.clone());
    let compensations = PgCompensationRepository::new(pool.clone());

    let ringo = employee("Ringo", &[]);
    employees.add(&ringo).await.unwrap();
    employees.save().await.unwrap();

    assert!(compensations.find_by_employee_id(&ringo.id).await.unwrap().is_none());

    let compensation = Compensation::new(
        ringo.id.clone(),
        120_000.0,
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    );
    compensations.add(&compensation).await.unwrap();
    compensations.save().await.unwrap();

    let stored = compensations.find_by_employee_id(&ringo.id).await.unwrap().unwrap();
    assert_eq!(stored.id, compensation.id);
    assert_eq!(stored.salary, 120_000.0);
    assert_eq!(stored.effective_date, compensation.effective_date);
}
