//! Find-identity use case.

use std::sync::Arc;

use domain::parse_identity_id;

use super::{log_store_failure, FindIdentityError};
use crate::repository::IdentityRepository;

#[derive(Debug, Clone)]
pub struct FindIdentityInput {
    /// Identifier taken from the authenticated session
    pub id: String,
}

/// Public view of an identity. The hash never leaves the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindIdentityOutput {
    pub email: String,
}

pub struct FindIdentity {
    store: Arc<dyn IdentityRepository>,
}

impl FindIdentity {
    pub fn new(store: Arc<dyn IdentityRepository>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        input: FindIdentityInput,
    ) -> Result<FindIdentityOutput, FindIdentityError> {
        let id = parse_identity_id(&input.id).map_err(|e| {
            tracing::debug!(error = %e, "rejected find identifier");
            FindIdentityError::InvalidData
        })?;

        match self.store.find_by_id(id).await {
            Ok(Some(identity)) => Ok(FindIdentityOutput {
                email: identity.email().to_string(),
            }),
            Ok(None) => Err(FindIdentityError::UserNotExists),
            Err(e) => {
                log_store_failure("find.find_by_id", &e);
                Err(FindIdentityError::InternalError)
            }
        }
    }
}
