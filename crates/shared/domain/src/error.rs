//! Domain-level errors.
//!
//! These errors describe why an identity could not be built or rehydrated.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::MIN_PASSWORD_LENGTH;

/// Reasons an `Identity` fails its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Identifier is malformed or nil
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Email does not match the accepted shape
    #[error("Invalid email")]
    InvalidEmail,

    /// Password shorter than the minimum length
    #[error("Password must be at least {} characters", MIN_PASSWORD_LENGTH)]
    InvalidPassword,

    /// Stored hash is not a hash produced by this domain
    #[error("Invalid password hash")]
    InvalidHash,

    /// The hash function itself failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl IdentityError {
    /// Create an invalid identifier error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        IdentityError::InvalidId(msg.into())
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        IdentityError::Hashing(msg.into())
    }

    /// True when the caller supplied bad data, false for internal failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, IdentityError::Hashing(_))
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, IdentityError>;
