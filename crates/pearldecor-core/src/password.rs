//! Password hashing backed by bcrypt.
//!
//! Each call to [`hash_password`] draws a fresh salt, so hashing the same
//! password twice yields different strings. Verification re-derives the hash
//! with the salt embedded in the stored value.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Anything that stores a password hash.
///
/// Implemented by the user record so handlers can write
/// `user.check_password(&dto.password)?` without touching the hash column.
pub trait Credentials {
    fn password_hash(&self) -> &str;

    fn set_password_hash(&mut self, hash: String);

    /// Hashes `password` with a new salt and stores the result.
    fn set_password(&mut self, password: &str) -> Result<(), AppError> {
        let hashed = hash_password(password)?;
        self.set_password_hash(hashed);
        Ok(())
    }

    fn check_password(&self, password: &str) -> Result<bool, AppError> {
        verify_password(password, self.password_hash())
    }
}
