//! Authenticate use case.

use std::sync::Arc;

use domain::IdentityFactoryPort;

use super::{is_bad_input, log_store_failure, AuthenticateError};
use crate::repository::IdentityRepository;

#[derive(Clone)]
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticateOutput {
    /// Identifier of the authenticated identity, used as token subject
    pub id: String,
}

/// Checks an email/password pair against the stored hash.
///
/// Unknown email and wrong password are indistinguishable to the caller,
/// in result and in timing.
pub struct AuthenticateIdentity {
    store: Arc<dyn IdentityRepository>,
    factory: Arc<dyn IdentityFactoryPort>,
}

impl AuthenticateIdentity {
    pub fn new(store: Arc<dyn IdentityRepository>, factory: Arc<dyn IdentityFactoryPort>) -> Self {
        Self { store, factory }
    }

    pub async fn execute(
        &self,
        input: AuthenticateInput,
    ) -> Result<AuthenticateOutput, AuthenticateError> {
        // Shape check only; the built identity is thrown away.
        self.factory
            .new_identity(&input.email, &input.password)
            .map_err(|e| {
                if is_bad_input("authenticate", &e) {
                    AuthenticateError::InvalidData
                } else {
                    AuthenticateError::InternalError
                }
            })?;

        let identity = match self.store.find_by_email(&input.email).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                self.factory.verify_against_dummy(&input.password);
                return Err(AuthenticateError::InvalidCredentials);
            }
            Err(e) => {
                log_store_failure("authenticate.find_by_email", &e);
                return Err(AuthenticateError::InternalError);
            }
        };

        if !identity.verify_password(&input.password) {
            tracing::debug!(id = %identity.id(), "password mismatch");
            return Err(AuthenticateError::InvalidCredentials);
        }

        Ok(AuthenticateOutput {
            id: identity.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{HashCost, Identity, IdentityError, IdentityFactory, MockIdentityFactoryPort};
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    use crate::repository::{MockIdentityRepository, StoreError};

    fn stored_identity() -> Identity {
        IdentityFactory::with_cost(HashCost::new(8, 1, 1))
            .new_identity("user@mail.com", "12345")
            .unwrap()
    }

    fn input(password: &str) -> AuthenticateInput {
        AuthenticateInput {
            email: "user@mail.com".to_string(),
            password: password.to_string(),
        }
    }

    fn shape_ok_factory() -> MockIdentityFactoryPort {
        let mut factory = MockIdentityFactoryPort::new();
        factory
            .expect_new_identity()
            .returning(|_, _| Ok(stored_identity()));
        factory
    }

    fn use_case(
        store: MockIdentityRepository,
        factory: MockIdentityFactoryPort,
    ) -> AuthenticateIdentity {
        AuthenticateIdentity::new(Arc::new(store), Arc::new(factory))
    }

    #[tokio::test]
    async fn test_authenticate_returns_id() {
        let identity = stored_identity();
        let expected = identity.id().to_string();

        let mut store = MockIdentityRepository::new();
        store
            .expect_find_by_email()
            .with(eq("user@mail.com"))
            .times(1)
            .returning(move |_| Ok(Some(identity.clone())));

        let output = use_case(store, shape_ok_factory())
            .execute(input("12345"))
            .await
            .unwrap();
        assert_eq!(output.id, expected);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let identity = stored_identity();
        let mut store = MockIdentityRepository::new();
        store
            .expect_find_by_email()
            .returning(move |_| Ok(Some(identity.clone())));

        let result = use_case(store, shape_ok_factory())
            .execute(input("54321"))
            .await;
        assert_eq!(result, Err(AuthenticateError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_runs_dummy_verification() {
        let mut store = MockIdentityRepository::new();
        store.expect_find_by_email().returning(|_| Ok(None));

        let mut factory = shape_ok_factory();
        factory
            .expect_verify_against_dummy()
            .with(eq("12345"))
            .times(1)
            .return_const(());

        let result = use_case(store, factory).execute(input("12345")).await;
        assert_eq!(result, Err(AuthenticateError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_invalid_shape() {
        let mut factory = MockIdentityFactoryPort::new();
        factory
            .expect_new_identity()
            .returning(|_, _| Err(IdentityError::InvalidPassword));
        let store = MockIdentityRepository::new();

        let result = use_case(store, factory).execute(input("1")).await;
        assert_eq!(result, Err(AuthenticateError::InvalidData));
    }

    #[tokio::test]
    async fn test_authenticate_store_failure() {
        let mut store = MockIdentityRepository::new();
        store
            .expect_find_by_email()
            .returning(|_| Err(StoreError::Database(DbErr::Custom("timeout".into()))));

        let result = use_case(store, shape_ok_factory())
            .execute(input("12345"))
            .await;
        assert_eq!(result, Err(AuthenticateError::InternalError));
    }
}
