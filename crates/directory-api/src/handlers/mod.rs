//! HTTP handlers

pub mod health;
pub mod employee;
pub mod compensation;
