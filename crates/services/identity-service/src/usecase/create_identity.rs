//! Create-identity use case.

use std::sync::Arc;

use domain::IdentityFactoryPort;

use super::{is_bad_input, log_store_failure, CreateIdentityError};
use crate::repository::{IdentityRepository, StoreError};

/// Input for account creation.
#[derive(Clone)]
pub struct CreateIdentityInput {
    pub email: String,
    pub password: String,
}

/// Registers a new identity when the email is free.
pub struct CreateIdentity {
    store: Arc<dyn IdentityRepository>,
    factory: Arc<dyn IdentityFactoryPort>,
}

impl CreateIdentity {
    pub fn new(store: Arc<dyn IdentityRepository>, factory: Arc<dyn IdentityFactoryPort>) -> Self {
        Self { store, factory }
    }

    pub async fn execute(&self, input: CreateIdentityInput) -> Result<(), CreateIdentityError> {
        let identity = self
            .factory
            .new_identity(&input.email, &input.password)
            .map_err(|e| {
                if is_bad_input("create", &e) {
                    CreateIdentityError::InvalidData
                } else {
                    CreateIdentityError::InternalError
                }
            })?;

        match self.store.find_by_email(identity.email()).await {
            Ok(Some(_)) => return Err(CreateIdentityError::EmailAlreadyUsed),
            Ok(None) => {}
            Err(e) => {
                log_store_failure("create.find_by_email", &e);
                return Err(CreateIdentityError::InternalError);
            }
        }

        // A concurrent create can still win the race; the unique index reports it.
        self.store.save(&identity).await.map_err(|e| match e {
            StoreError::DuplicateEmail => CreateIdentityError::EmailAlreadyUsed,
            other => {
                log_store_failure("create.save", &other);
                CreateIdentityError::InternalError
            }
        })?;

        tracing::info!(id = %identity.id(), "identity created");
        Ok(())
    }
}
