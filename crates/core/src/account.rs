//! Registration and login input validation.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Request body for `POST /api/auth/register`.
///
/// Missing keys deserialize to empty strings so they surface as validation
/// messages instead of extractor rejections.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(default)]
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterInput {
    /// Trim the username, normalise the email, then validate.
    pub fn into_checked(mut self) -> Result<Self, CoreError> {
        self.username = self.username.trim().to_string();
        self.email = normalize_email(&self.email);
        self.validate()
            .map_err(|e| first_error(&e, &["username", "email", "password"]))?;
        Ok(self)
    }
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginInput {
    pub fn into_checked(mut self) -> Result<Self, CoreError> {
        self.email = normalize_email(&self.email);
        self.validate()
            .map_err(|e| first_error(&e, &["email", "password"]))?;
        Ok(self)
    }
}

/// Emails are matched case-insensitively by storing them lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Collapse validator output into the message of the first failing field,
/// walking fields in `order`.
fn first_error(errors: &ValidationErrors, order: &[&str]) -> CoreError {
    let field_errors = errors.field_errors();
    let message = order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string());
    CoreError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn register(username: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn valid_registration_is_normalised() {
        let input = register("  neo ", " Neo@Matrix.IO ", "redpill")
            .into_checked()
            .unwrap();
        assert_eq!(input.username, "neo");
        assert_eq!(input.email, "neo@matrix.io");
    }

    #[test]
    fn short_username_is_reported_first() {
        assert_matches!(
            register(" a ", "bad", "x").into_checked(),
            Err(CoreError::Validation(msg)) if msg == "Username must be at least 3 characters"
        );
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert_matches!(
            register("trinity", "not-an-email", "secret1").into_checked(),
            Err(CoreError::Validation(msg)) if msg == "Please provide a valid email"
        );
    }

    #[test]
    fn short_password_is_rejected() {
        assert_matches!(
            register("trinity", "t@matrix.io", "12345").into_checked(),
            Err(CoreError::Validation(msg)) if msg == "Password must be at least 6 characters"
        );
    }

    #[test]
    fn missing_keys_deserialize_to_validation_errors() {
        let input: RegisterInput = serde_json::from_str("{}").unwrap();
        assert_matches!(input.into_checked(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn login_requires_password() {
        let input = LoginInput {
            email: "morpheus@matrix.io".into(),
            password: String::new(),
        };
        assert_matches!(
            input.into_checked(),
            Err(CoreError::Validation(msg)) if msg == "Password is required"
        );
    }

    #[test]
    fn login_email_is_lowercased() {
        let input = LoginInput {
            email: "Morpheus@Matrix.io".into(),
            password: "pw".into(),
        }
        .into_checked()
        .unwrap();
        assert_eq!(input.email, "morpheus@matrix.io");
    }
}
