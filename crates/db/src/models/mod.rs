//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row. Insert and update inputs are the validated shapes from
//! `catalog_core`.

pub mod movie;
pub mod user;
