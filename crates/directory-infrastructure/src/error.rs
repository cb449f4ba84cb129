//! Store setup errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database.url is required for the postgres backend")]
    MissingDatabaseUrl,

    #[error("Connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Seed file error: {0}")]
    SeedFile(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error(transparent)]
    Domain(#[from] directory_core::DomainError),
}
