//! HTTP handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod identity_handler;

pub use auth_handler::login;
pub use health_handler::health_check;
pub use identity_handler::{create_identity, delete_identity, find_identity, update_identity};
