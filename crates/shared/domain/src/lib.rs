//! Domain layer - Identity entity, its invariants and the factory that builds it.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage and transport crates only ever see an `Identity` that has passed
//! validation.

pub mod constants;
pub mod error;
pub mod factory;
pub mod identity;
pub mod password;

pub use constants::*;
pub use error::{DomainResult, IdentityError};
pub use factory::{IdentityFactory, IdentityFactoryPort};
#[cfg(any(test, feature = "test-utils"))]
pub use factory::MockIdentityFactoryPort;
pub use identity::{is_valid_email, parse_identity_id, Identity};
pub use password::{HashCost, Password};
