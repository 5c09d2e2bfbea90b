//! Credential Manager — salted argon2 hashing, fail-closed verification
//!
//! Passwords are only ever accepted as input; what gets persisted and
//! compared is the PHC hash string. Hashing is deliberately expensive,
//! so callers keep it outside any store lock.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::DatastoreError;

/// Hash a password with a fresh random salt.
///
/// The same password hashed twice yields different strings; both
/// verify.
pub fn hash_password(password: &str) -> Result<String, DatastoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| DatastoreError::Credential)
}

/// Verify a password against a stored PHC hash string.
///
/// Comparison is the argon2 verifier's own constant-time check. Any
/// parse or internal failure verifies as false, never as success.
pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
