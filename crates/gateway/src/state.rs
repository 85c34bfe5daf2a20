//! Application state for dependency injection.

use std::sync::Arc;

use identity_service_lib::infra::Database;
use identity_service_lib::usecase::IdentityUseCases;

use crate::token::TokenIssuer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub identities: Arc<IdentityUseCases>,
    pub tokens: Arc<TokenIssuer>,
    /// Present when the store is database-backed; used by health checks
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        identities: IdentityUseCases,
        tokens: TokenIssuer,
        database: Option<Database>,
    ) -> Self {
        Self {
            identities: Arc::new(identities),
            tokens: Arc::new(tokens),
            database,
        }
    }
}
