//! Argon2id password hashing and verification.
//!
//! Hashing parameters come from [`SecurityConfig`]; both operations run on the
//! blocking pool because Argon2 is CPU-intensive.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;
use tokio::task;

use crate::config::SecurityConfig;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid Argon2 params: {0}")]
    InvalidParams(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Hashing task panicked")]
    TaskPanicked,
}

pub struct PasswordService {
    config: SecurityConfig,
}

impl PasswordService {
    #[must_use]
    pub const fn new(config: SecurityConfig) -> Self {
        Self { config }
    }

    /// Hashes a password with a fresh random salt. Two calls on the same
    /// input yield different strings; the salt is embedded in the output.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let password = password.to_string();
        let config = self.config.clone();

        task::spawn_blocking(move || hash_with_config(&password, &config))
            .await
            .map_err(|_| PasswordError::TaskPanicked)?
    }

    /// Compares a password against a stored hash. Returns false, never an
    /// error, for empty inputs or malformed hashes.
    pub async fn verify(&self, password: &str, hash: &str) -> bool {
        if password.is_empty() || hash.is_empty() {
            return false;
        }

        let password = password.to_string();
        let hash = hash.to_string();

        task::spawn_blocking(move || {
            PasswordHash::new(&hash).is_ok_and(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await
        .unwrap_or(false)
    }
}

fn hash_with_config(password: &str, config: &SecurityConfig) -> Result<String, PasswordError> {
    let params = Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| PasswordError::InvalidParams(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PasswordService {
        // Light params keep the tests fast
        PasswordService::new(SecurityConfig {
            argon2_memory_cost_kib: 1024,
            argon2_time_cost: 1,
            argon2_parallelism: 1,
        })
    }

    #[tokio::test]
    async fn hash_round_trips() {
        let svc = service();
        let hash = svc.hash("secret1").await.unwrap();

        assert!(svc.verify("secret1", &hash).await);
        assert!(!svc.verify("secret2", &hash).await);
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let svc = service();
        let first = svc.hash("secret1").await.unwrap();
        let second = svc.hash("secret1").await.unwrap();

        assert_ne!(first, second);
        assert!(svc.verify("secret1", &first).await);
        assert!(svc.verify("secret1", &second).await);
    }

    #[tokio::test]
    async fn empty_password_is_rejected() {
        let svc = service();

        assert!(matches!(
            svc.hash("").await,
            Err(PasswordError::EmptyPassword)
        ));
        assert!(!svc.verify("", "whatever").await);
        assert!(!svc.verify("secret1", "").await);
    }

    #[tokio::test]
    async fn malformed_hash_verifies_false() {
        let svc = service();
        assert!(!svc.verify("secret1", "not-a-phc-string").await);
    }
}
