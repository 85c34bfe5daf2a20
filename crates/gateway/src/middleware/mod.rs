//! Middleware for authentication and token echo.

mod auth;
mod echo;

pub use auth::{auth_middleware, CurrentIdentity};
pub use echo::echo_auth_token;
