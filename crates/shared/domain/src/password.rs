//! Password value object - hashing and verification of secrets.
//!
//! Plaintext never leaves this module; everything else handles the
//! Argon2id PHC string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    MIN_PASSWORD_LENGTH, PASSWORD_HASH_PATTERN,
};
use crate::error::{DomainResult, IdentityError};

static HASH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PASSWORD_HASH_PATTERN).expect("password hash pattern compiles"));

/// Argon2 work factor applied when hashing new passwords.
///
/// Verification always uses the parameters embedded in the stored hash, so
/// changing the cost never invalidates existing identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashCost {
    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    fn params(&self) -> DomainResult<Params> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| IdentityError::hashing(format!("invalid hash cost: {}", e)))
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self::new(
            DEFAULT_HASH_MEMORY_KIB,
            DEFAULT_HASH_ITERATIONS,
            DEFAULT_HASH_PARALLELISM,
        )
    }
}

/// Password value object holding a salted Argon2id hash.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password at the given work factor.
    ///
    /// # Errors
    /// `InvalidPassword` if shorter than the minimum length (counted in
    /// bytes), `Hashing` if Argon2 rejects the parameters or fails.
    pub fn new(plain_text: &str, cost: HashCost) -> DomainResult<Self> {
        if plain_text.len() < MIN_PASSWORD_LENGTH {
            return Err(IdentityError::InvalidPassword);
        }

        let hash = Self::hash(plain_text, cost)?;
        Ok(Self { hash })
    }

    /// Wrap an existing hash (from storage). Not validated here; see
    /// `is_well_formed`.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Whether the hash has the exact shape `Password::new` produces.
    pub fn is_well_formed(&self) -> bool {
        HASH_REGEX.is_match(&self.hash)
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    fn hash(plain_text: &str, cost: HashCost) -> DomainResult<String> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, cost.params()?);
        let salt = SaltString::generate(&mut OsRng);
        let hash = argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| IdentityError::hashing(e.to_string()))?;
        Ok(hash.to_string())
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
