//! Identity database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainResult, Identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "identities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity, re-checking invariants
impl TryFrom<Model> for Identity {
    type Error = domain::IdentityError;

    fn try_from(model: Model) -> DomainResult<Self> {
        Identity::from_stored(model.id, model.email, model.password_hash)
    }
}
