//! Hashing of the passwords kept in `users.hashed_password`.
//!
//! Stored values are Argon2id PHC strings, which carry their own salt and parameters.

use argon2::{
    password_hash::{rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// PHC string for `password` under a fresh random salt
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed_password = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hashed_password.to_string())
}

/// Checks a login attempt against the stored hash of a user
///
/// A stored value that is not a PHC string is an error rather than a mismatch.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, HashError> {
    let stored = PasswordHash::new(hashed_password)?;

    match stored.verify_password(&[&Argon2::default()], password) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(err) => Err(err),
    }
}
