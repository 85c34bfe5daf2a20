//! Closed error sets returned by the identity use cases.
//!
//! Messages are the exact strings clients see. Internal causes are logged
//! where they are collapsed into `InternalError` and never carried here.

use thiserror::Error;

use common::AppError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateIdentityError {
    #[error("invalid data")]
    InvalidData,
    #[error("email already used")]
    EmailAlreadyUsed,
    #[error("internal error")]
    InternalError,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticateError {
    #[error("invalid data")]
    InvalidData,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("internal error")]
    InternalError,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateIdentityError {
    #[error("invalid data")]
    InvalidData,
    #[error("user not exists")]
    UserNotExists,
    #[error("email already used")]
    EmailAlreadyUsed,
    #[error("internal error")]
    InternalError,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteIdentityError {
    #[error("invalid data")]
    InvalidData,
    #[error("user not exists")]
    UserNotExists,
    #[error("internal error")]
    InternalError,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindIdentityError {
    #[error("invalid data")]
    InvalidData,
    #[error("user not exists")]
    UserNotExists,
    #[error("internal error")]
    InternalError,
}

// =============================================================================
// HTTP mapping
// =============================================================================

impl From<CreateIdentityError> for AppError {
    fn from(err: CreateIdentityError) -> Self {
        match err {
            CreateIdentityError::InvalidData => AppError::validation(err.to_string()),
            CreateIdentityError::EmailAlreadyUsed => AppError::conflict(err.to_string()),
            CreateIdentityError::InternalError => AppError::internal("create identity failed"),
        }
    }
}

impl From<AuthenticateError> for AppError {
    fn from(err: AuthenticateError) -> Self {
        match err {
            AuthenticateError::InvalidData => AppError::validation(err.to_string()),
            AuthenticateError::InvalidCredentials => AppError::InvalidCredentials,
            AuthenticateError::InternalError => AppError::internal("authentication failed"),
        }
    }
}

impl From<UpdateIdentityError> for AppError {
    fn from(err: UpdateIdentityError) -> Self {
        match err {
            UpdateIdentityError::InvalidData => AppError::validation(err.to_string()),
            UpdateIdentityError::UserNotExists => AppError::bad_request(err.to_string()),
            UpdateIdentityError::EmailAlreadyUsed => AppError::conflict(err.to_string()),
            UpdateIdentityError::InternalError => AppError::internal("update identity failed"),
        }
    }
}

impl From<DeleteIdentityError> for AppError {
    fn from(err: DeleteIdentityError) -> Self {
        match err {
            DeleteIdentityError::InvalidData => AppError::validation(err.to_string()),
            DeleteIdentityError::UserNotExists => AppError::bad_request(err.to_string()),
            DeleteIdentityError::InternalError => AppError::internal("delete identity failed"),
        }
    }
}

impl From<FindIdentityError> for AppError {
    fn from(err: FindIdentityError) -> Self {
        match err {
            FindIdentityError::InvalidData => AppError::validation(err.to_string()),
            FindIdentityError::UserNotExists => AppError::bad_request(err.to_string()),
            FindIdentityError::InternalError => AppError::internal("find identity failed"),
        }
    }
}
