//! Password value object - salted one-way hashing with Argon2id.
//!
//! Wraps a PHC-format hash string. Plaintext passwords exist only as
//! transient parameters; they are never stored or returned.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{DomainError, DomainResult};

/// Argon2id cost parameters.
///
/// Injected rather than hardcoded so tests can run with cheap settings
/// while production keeps an expensive brute-force-resistant default.
#[derive(Debug, Clone, Copy)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl HashingParams {
    /// Production default: OWASP-recommended Argon2id settings.
    pub fn strong() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }

    /// Cheapest valid settings, for tests only.
    pub fn fast() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn argon2(&self) -> DomainResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| DomainError::password(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl Default for HashingParams {
    fn default() -> Self {
        Self::strong()
    }
}

/// A salted password verifier in PHC string format.
#[derive(Debug, Clone)]
pub struct Password(String);

impl Password {
    /// Hash a plaintext password with a fresh random salt.
    pub fn new(plain: &str, params: &HashingParams) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = params
            .argon2()?
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| DomainError::password(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap an already-hashed verifier loaded from storage.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Verify a plaintext password against this verifier.
    ///
    /// Cost parameters are read from the hash string itself, so verification
    /// works regardless of the params the verifier was created with. Any
    /// parse failure counts as a mismatch.
    pub fn verify(&self, plain: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }

    /// Consume the value object, returning the hash string for storage.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Borrow the hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
