//! Identity use cases.
//!
//! Each use case is a single linear pass over the factory and the store
//! with early exits. None of them keep state between calls, so one
//! instance is shared by every request.

mod authenticate_identity;
mod create_identity;
mod delete_identity;
mod errors;
mod find_identity;
mod update_identity;

use std::sync::Arc;

use domain::{IdentityError, IdentityFactoryPort};

use crate::repository::{IdentityRepository, StoreError};

pub use authenticate_identity::{AuthenticateIdentity, AuthenticateInput, AuthenticateOutput};
pub use create_identity::{CreateIdentity, CreateIdentityInput};
pub use delete_identity::{DeleteIdentity, DeleteIdentityInput};
pub use errors::{
    AuthenticateError, CreateIdentityError, DeleteIdentityError, FindIdentityError,
    UpdateIdentityError,
};
pub use find_identity::{FindIdentity, FindIdentityInput, FindIdentityOutput};
pub use update_identity::{UpdateIdentity, UpdateIdentityInput, UpdateIdentityOutput};

/// All five use cases wired to one store and one factory.
pub struct IdentityUseCases {
    pub create: CreateIdentity,
    pub authenticate: AuthenticateIdentity,
    pub update: UpdateIdentity,
    pub delete: DeleteIdentity,
    pub find: FindIdentity,
}

impl IdentityUseCases {
    pub fn new(store: Arc<dyn IdentityRepository>, factory: Arc<dyn IdentityFactoryPort>) -> Self {
        Self {
            create: CreateIdentity::new(store.clone(), factory.clone()),
            authenticate: AuthenticateIdentity::new(store.clone(), factory.clone()),
            update: UpdateIdentity::new(store.clone(), factory),
            delete: DeleteIdentity::new(store.clone()),
            find: FindIdentity::new(store),
        }
    }
}

/// Log a store failure before it is collapsed into an internal error.
fn log_store_failure(operation: &'static str, err: &StoreError) {
    tracing::error!(operation, error = %err, "identity store failure");
}

/// Split a factory error into "caller sent bad data" (true) or an internal
/// failure (false), logging the latter.
fn is_bad_input(operation: &'static str, err: &IdentityError) -> bool {
    if err.is_validation() {
        tracing::debug!(operation, error = %err, "rejected identity input");
        true
    } else {
        tracing::error!(operation, error = %err, "identity factory failure");
        false
    }
}
