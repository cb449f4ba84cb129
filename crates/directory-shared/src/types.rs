//! Common types

use uuid::Uuid;

/// Opaque record identity. Generated ids are UUIDv4 strings, but any
/// non-empty string loaded from the store or a seed file is accepted.
pub type EntityId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}

pub fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}
