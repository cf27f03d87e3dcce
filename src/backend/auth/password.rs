/**
 * Password Hashing
 *
 * Wraps bcrypt for storing and checking user passwords. The work factor
 * comes from configuration; verification is constant-time inside bcrypt.
 *
 * A hasher also carries a dummy hash computed at the same cost. Signin
 * verifies against it when the email is unknown, so the response takes
 * as long as a real password check.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::shared::validation::MAX_PASSWORD_BYTES;

const DUMMY_PASSWORD: &str = "timing-equalisation-only";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,

    #[error("password exceeds 72 bytes")]
    TooLong,

    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// bcrypt password hasher with a fixed cost
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher; fails if bcrypt rejects the cost.
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?;

        Ok(Self {
            cost,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Hash a plaintext password.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.is_empty() {
            return Err(PasswordError::Empty);
        }
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }

        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Inputs that could never have been hashed return `Ok(false)`; a
    /// malformed stored hash is an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        if plaintext.is_empty() || plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        Ok(bcrypt::verify(plaintext, hash)?)
    }

    /// Burn one verification worth of CPU and report a mismatch.
    pub fn verify_dummy(&self, plaintext: &str) -> bool {
        let _ = bcrypt::verify(plaintext, &self.dummy_hash);
        false
    }
}
