//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct (camelCase wire format)
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO (all `Option` fields) for partial merges

pub mod client;
pub mod integration;
pub mod milestone;
