//! Request extractors that authenticate and authorize callers.
//!
//! - [`auth`] -- bearer-token authentication ([`auth::AuthUser`]).
//! - [`rbac`] -- role checks layered on top ([`rbac::RequireAdmin`]).

pub mod auth;
pub mod rbac;
