//! Catalog seeding: OMDb import and admin bootstrap.
//!
//! - [`config`] -- seeder settings from the environment.
//! - [`omdb`] -- OMDb client and payload conversion.
//! - [`titles`] -- the built-in import list.
//! - [`seeder`] -- the import and bootstrap routines.

pub mod config;
pub mod error;
pub mod omdb;
pub mod seeder;
pub mod titles;
