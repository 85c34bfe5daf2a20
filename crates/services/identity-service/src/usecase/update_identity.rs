//! Update-identity use case.

use std::sync::Arc;

use domain::IdentityFactoryPort;

use super::{is_bad_input, log_store_failure, UpdateIdentityError};
use crate::repository::{IdentityRepository, StoreError};

/// Replacement email and password for the identity behind `id`.
#[derive(Clone)]
pub struct UpdateIdentityInput {
    /// Identifier taken from the authenticated session
    pub id: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateIdentityOutput {
    pub id: String,
}

/// Replaces email and password hash; the identifier never changes.
pub struct UpdateIdentity {
    store: Arc<dyn IdentityRepository>,
    factory: Arc<dyn IdentityFactoryPort>,
}

impl UpdateIdentity {
    pub fn new(store: Arc<dyn IdentityRepository>, factory: Arc<dyn IdentityFactoryPort>) -> Self {
        Self { store, factory }
    }

    pub async fn execute(
        &self,
        input: UpdateIdentityInput,
    ) -> Result<UpdateIdentityOutput, UpdateIdentityError> {
        let identity = self
            .factory
            .get_identity(&input.id, &input.email, &input.password)
            .map_err(|e| {
                if is_bad_input("update", &e) {
                    UpdateIdentityError::InvalidData
                } else {
                    UpdateIdentityError::InternalError
                }
            })?;

        match self.store.find_by_id(identity.id()).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(UpdateIdentityError::UserNotExists),
            Err(e) => {
                log_store_failure("update.find_by_id", &e);
                return Err(UpdateIdentityError::InternalError);
            }
        }

        match self.store.find_by_email(identity.email()).await {
            Ok(Some(owner)) if owner.id() != identity.id() => {
                return Err(UpdateIdentityError::EmailAlreadyUsed)
            }
            Ok(_) => {}
            Err(e) => {
                log_store_failure("update.find_by_email", &e);
                return Err(UpdateIdentityError::InternalError);
            }
        }

        self.store.update(&identity).await.map_err(|e| match e {
            StoreError::DuplicateEmail => UpdateIdentityError::EmailAlreadyUsed,
            other => {
                log_store_failure("update.update", &other);
                UpdateIdentityError::InternalError
            }
        })?;

        Ok(UpdateIdentityOutput {
            id: identity.id().to_string(),
        })
    }
}
