//! SeaORM implementation of the identity store.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::identity::{self, ActiveModel, Entity as IdentityEntity};
use super::identity_repository::{IdentityRepository, StoreError};
use domain::Identity;

/// Concrete implementation of IdentityRepository backed by a SQL database.
///
/// Email uniqueness is enforced by the `identities.email` unique index.
pub struct IdentityStore {
    db: DatabaseConnection,
}

impl IdentityStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdentityRepository for IdentityStore {
    async fn save(&self, identity: &Identity) -> Result<(), StoreError> {
        let active_model = ActiveModel {
            id: Set(identity.id()),
            email: Set(identity.email().to_string()),
            password_hash: Set(identity.password_hash().to_string()),
        };

        IdentityEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Identity>, StoreError> {
        let model = IdentityEntity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Identity::try_from).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError> {
        let model = IdentityEntity::find()
            .filter(identity::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(Identity::try_from).transpose()?)
    }

    async fn update(&self, identity: &Identity) -> Result<(), StoreError> {
        let result = IdentityEntity::update_many()
            .col_expr(identity::Column::Email, Expr::value(identity.email()))
            .col_expr(
                identity::Column::PasswordHash,
                Expr::value(identity.password_hash()),
            )
            .filter(identity::Column::Id.eq(identity.id()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(id = %identity.id(), "update matched no identity");
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        IdentityEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
