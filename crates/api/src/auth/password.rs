//! Account password storage.
//!
//! Register and the seeder's admin bootstrap store [`hash_password`] output in
//! `users.password_hash`; login checks candidates with [`verify_password`].

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// PHC string for a new account password, salted per call.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a login attempt against a stored hash.
///
/// A mismatch is `Ok(false)` so login can answer 401. `Err` means the stored
/// hash itself is unusable.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_accepts_the_registered_password() {
        let stored = hash_password("popcorn-and-soda").unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(verify_password("popcorn-and-soda", &stored).unwrap());
    }

    #[test]
    fn login_with_another_password_is_a_mismatch() {
        let stored = hash_password("popcorn-and-soda").unwrap();

        assert!(!verify_password("popcorn-and-sod", &stored).unwrap());
        assert!(!verify_password("POPCORN-AND-SODA", &stored).unwrap());
        assert!(!verify_password("", &stored).unwrap());
    }

    #[test]
    fn two_accounts_with_one_password_store_different_hashes() {
        let first = hash_password("matinee").unwrap();
        let second = hash_password("matinee").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("matinee", &first).unwrap());
        assert!(verify_password("matinee", &second).unwrap());
    }

    #[test]
    fn unusable_stored_hash_is_an_error() {
        assert!(verify_password("matinee", "matinee").is_err());
        assert!(verify_password("matinee", "").is_err());
    }
}
