//! # Directory Infrastructure
//! 
//! Record store implementations (adapters) and seeding.

pub mod database;
pub mod memory;
pub mod store;
pub mod seed;
pub mod error;

pub use database::{create_pool, PgEmployeeRepository, PgCompensationRepository};
pub use memory::{InMemoryStore, InMemoryEmployeeRepository, InMemoryCompensationRepository};
pub use store::Store;
pub use seed::seed_employees;
pub use error::StoreError;
