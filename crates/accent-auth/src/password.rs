//! Password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::AuthError;

/// Argon2id password hasher producing PHC strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a hasher with the argon2 defaults.
    pub fn new() -> Self {
        Self
    }

    /// Hash a password.
    ///
    /// Returns a PHC string: `$argon2id$v=19$m=...,t=...,p=...$salt$hash`
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {}", e)))
    }

    /// Verify a password against a PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::Internal(format!("invalid password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("SecurePass123!").unwrap();
        assert!(hash.starts_with("$argon2"));

        assert!(hasher.verify("SecurePass123!", &hash).unwrap());
        assert!(!hasher.verify("WrongPassword", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = PasswordHasher::new();
        let hash1 = hasher.hash("TestPassword1").unwrap();
        let hash2 = hasher.hash("TestPassword1").unwrap();
        assert_ne!(hash1, hash2);
        assert!(hasher.verify("TestPassword1", &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash() {
        assert!(PasswordHasher::new().verify("x", "not-a-hash").is_err());
    }
}
