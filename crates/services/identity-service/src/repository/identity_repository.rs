//! Store port: the persistence capability the use cases depend on.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

use domain::{Identity, IdentityError};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Failures reported by a store.
///
/// Absence is never an error: lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The unique email constraint rejected the write
    #[error("email already stored")]
    DuplicateEmail,

    /// A stored record no longer satisfies the identity invariants
    #[error("stored identity is invalid: {0}")]
    Corrupt(#[from] IdentityError),

    #[error("database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::DuplicateEmail,
            _ => StoreError::Database(err),
        }
    }
}

/// Identity repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Persist a new identity
    async fn save(&self, identity: &Identity) -> Result<(), StoreError>;

    /// Find identity by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError>;

    /// Find identity by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Overwrite email and password hash of the identity with the same ID
    async fn update(&self, identity: &Identity) -> Result<(), StoreError>;

    /// Remove identity by ID
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
