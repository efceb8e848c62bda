//! Credential hashing
//!
//! Passwords are stored as Argon2id PHC strings (algorithm, parameters,
//! random salt and hash in one field). Verification goes through the Argon2
//! verifier, which compares in constant time. Both operations are
//! CPU-bound, so the async variants move them onto the blocking pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a fresh random salt
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Check a password against a stored PHC string.
    ///
    /// A stored value that does not parse as a PHC string is an error, not
    /// a mismatch.
    pub fn verify(password: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| anyhow::anyhow!("Stored credential is not a valid hash: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// `hash` on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// `verify` on the blocking thread pool
    pub async fn verify_async(password: String, stored_hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &stored_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
