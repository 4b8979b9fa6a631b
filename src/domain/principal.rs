//! Administrative principal domain model.
//!
//! Principals are created out-of-band (seed flow at startup); the issuer only
//! ever reads them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An administrative identity capable of authenticating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier.
    pub id: Uuid,
    /// Login identifier.
    pub email: String,
    /// Display name.
    pub display_name: String,
    /// Argon2id PHC-format hash of the secret. Never serialized out.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the principal was created.
    pub created_at: DateTime<Utc>,
    /// When the principal was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Principal {
    /// Create a new principal from an already-hashed secret.
    pub fn new(email: String, display_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Verify a presented secret against the stored hash.
    ///
    /// Argon2id verification; constant-time comparison comes from the
    /// password-hash implementation, never from string equality.
    pub fn verify_password(&self, presented: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(presented.as_bytes(), &parsed)
            .is_ok()
    }

    /// Hash a secret for storage (seed flow and tests).
    pub fn hash_password(plain: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| format!("Failed to hash password: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() {
        let hash = Principal::hash_password("correct horse battery staple").unwrap();
        let principal = Principal::new(
            "admin@example.com".to_string(),
            "Admin".to_string(),
            hash,
        );

        assert!(principal.verify_password("correct horse battery staple"));
        assert!(!principal.verify_password("wrong"));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let principal = Principal::new(
            "admin@example.com".to_string(),
            "Admin".to_string(),
            "not-a-phc-string".to_string(),
        );
        assert!(!principal.verify_password("anything"));
    }
}
