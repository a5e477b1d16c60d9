//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` create/update DTOs for incoming payloads
//! - `Serialize` view structs projected from the entity for responses

pub mod fighter;
pub mod stance;
