//! Identity factory - the only place new identities are minted.

use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::error::{DomainResult, IdentityError};
use crate::identity::{is_valid_email, parse_identity_id, Identity};
use crate::password::{HashCost, Password};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Builds validated, hashed identities from raw input.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait IdentityFactoryPort: Send + Sync {
    /// Validate email and password, generate a fresh id and hash the password.
    fn new_identity(&self, email: &str, password: &str) -> DomainResult<Identity>;

    /// Same as `new_identity` but keeps an existing identifier.
    fn get_identity(&self, id: &str, email: &str, password: &str) -> DomainResult<Identity>;

    /// Run a verification that always fails, costing about as much as a real one.
    fn verify_against_dummy(&self, password: &str);
}

/// Argon2id-backed factory.
pub struct IdentityFactory {
    cost: HashCost,
    dummy: OnceCell<Password>,
}

impl IdentityFactory {
    /// Factory with the production work factor.
    pub fn new() -> Self {
        Self::with_cost(HashCost::default())
    }

    pub fn with_cost(cost: HashCost) -> Self {
        Self {
            cost,
            dummy: OnceCell::new(),
        }
    }

    pub fn cost(&self) -> HashCost {
        self.cost
    }

    fn check_email(email: &str) -> DomainResult<()> {
        if is_valid_email(email) {
            Ok(())
        } else {
            Err(IdentityError::InvalidEmail)
        }
    }
}

impl Default for IdentityFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityFactoryPort for IdentityFactory {
    fn new_identity(&self, email: &str, password: &str) -> DomainResult<Identity> {
        Self::check_email(email)?;
        let password = Password::new(password, self.cost)?;
        Identity::new(Uuid::new_v4(), email.to_string(), password)
    }

    fn get_identity(&self, id: &str, email: &str, password: &str) -> DomainResult<Identity> {
        let id = parse_identity_id(id)?;
        Self::check_email(email)?;
        let password = Password::new(password, self.cost)?;
        Identity::new(id, email.to_string(), password)
    }

    fn verify_against_dummy(&self, password: &str) {
        // An unusable cost already fails every real hash as an internal error.
        if let Ok(dummy) = self
            .dummy
            .get_or_try_init(|| Password::new("dummy-password", self.cost))
        {
            let _ = dummy.verify(password);
        }
    }
}
