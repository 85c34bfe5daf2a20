//! Delete-identity use case.

use std::sync::Arc;

use domain::parse_identity_id;

use super::{log_store_failure, DeleteIdentityError};
use crate::repository::IdentityRepository;

#[derive(Debug, Clone)]
pub struct DeleteIdentityInput {
    /// Identifier taken from the authenticated session
    pub id: String,
}

/// Removes an existing identity.
pub struct DeleteIdentity {
    store: Arc<dyn IdentityRepository>,
}

impl DeleteIdentity {
    pub fn new(store: Arc<dyn IdentityRepository>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: DeleteIdentityInput) -> Result<(), DeleteIdentityError> {
        let id = parse_identity_id(&input.id).map_err(|e| {
            tracing::debug!(error = %e, "rejected delete identifier");
            DeleteIdentityError::InvalidData
        })?;

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(DeleteIdentityError::UserNotExists),
            Err(e) => {
                log_store_failure("delete.find_by_id", &e);
                return Err(DeleteIdentityError::InternalError);
            }
        }

        self.store.delete(id).await.map_err(|e| {
            log_store_failure("delete.delete", &e);
            DeleteIdentityError::InternalError
        })?;

        tracing::info!(%id, "identity deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{HashCost, IdentityFactory, IdentityFactoryPort};
    use mockall::predicate::eq;
    use sea_orm::DbErr;
    use uuid::Uuid;

    use crate::repository::{MockIdentityRepository, StoreError};

    fn input(id: &str) -> DeleteIdentityInput {
        DeleteIdentityInput { id: id.to_string() }
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let identity = IdentityFactory::with_cost(HashCost::new(8, 1, 1))
            .new_identity("user@mail.com", "12345")
            .unwrap();
        let id = identity.id();

        let mut store = MockIdentityRepository::new();
        store
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(identity.clone())));
        store
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let result = DeleteIdentity::new(Arc::new(store))
            .execute(input(&id.to_string()))
            .await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let mut store = MockIdentityRepository::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_delete().never();

        let result = DeleteIdentity::new(Arc::new(store))
            .execute(input(&Uuid::new_v4().to_string()))
            .await;
        assert_eq!(result, Err(DeleteIdentityError::UserNotExists));
    }

    #[tokio::test]
    async fn test_delete_malformed_or_nil_id() {
        let use_case = DeleteIdentity::new(Arc::new(MockIdentityRepository::new()));

        assert_eq!(
            use_case.execute(input("abc")).await,
            Err(DeleteIdentityError::InvalidData)
        );
        assert_eq!(
            use_case.execute(input(&Uuid::nil().to_string())).await,
            Err(DeleteIdentityError::InvalidData)
        );
    }

    #[tokio::test]
    async fn test_delete_store_failure() {
        let identity = IdentityFactory::with_cost(HashCost::new(8, 1, 1))
            .new_identity("user@mail.com", "12345")
            .unwrap();
        let mut store = MockIdentityRepository::new();
        store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(identity.clone())));
        store
            .expect_delete()
            .returning(|_| Err(StoreError::Database(DbErr::Custom("locked".into()))));

        let result = DeleteIdentity::new(Arc::new(store))
            .execute(input(&Uuid::new_v4().to_string()))
            .await;
        assert_eq!(result, Err(DeleteIdentityError::InternalError));
    }
}
