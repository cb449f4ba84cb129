//! # Directory Shared
//! 
//! Shared configuration, telemetry, and id helpers for the employee directory.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
