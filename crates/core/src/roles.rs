//! Account roles and the capabilities they grant.
//!
//! The string forms must match the CHECK constraint in
//! `20260301000002_create_users_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// The closed set of account roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular reader account; the default for self-registration.
    #[default]
    User,
    /// Catalog administrator.
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => ROLE_USER,
            Role::Admin => ROLE_ADMIN,
        }
    }

    /// Whether this role may create, update or delete movies.
    pub fn can_manage_catalog(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_USER => Ok(Role::User),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(CoreError::Internal(format!("unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn only_admin_manages_catalog() {
        assert!(Role::Admin.can_manage_catalog());
        assert!(!Role::User.can_manage_catalog());
    }

    #[test]
    fn parses_stored_names() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
    }

    #[test]
    fn rejects_unknown_and_mis_cased_names() {
        assert_matches!("Admin".parse::<Role>(), Err(CoreError::Internal(_)));
        assert_matches!("root".parse::<Role>(), Err(CoreError::Internal(_)));
    }

    #[test]
    fn display_matches_serde_form() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }
}
