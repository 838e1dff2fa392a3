//! Domain logic for the movie catalog.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers call into
//! it for validation, pagination arithmetic and query parameter parsing.

pub mod account;
pub mod error;
pub mod movie;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod sort;
pub mod types;
