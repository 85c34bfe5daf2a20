//! Repository layer for identity persistence.

pub mod entities;
mod identity_repository;
mod identity_store;
mod memory_store;

pub use identity_repository::{IdentityRepository, StoreError};
#[cfg(any(test, feature = "test-utils"))]
pub use identity_repository::MockIdentityRepository;
pub use identity_store::IdentityStore;
pub use memory_store::InMemoryIdentityStore;
