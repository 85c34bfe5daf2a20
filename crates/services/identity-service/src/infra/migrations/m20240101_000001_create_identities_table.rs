//! Migration: Create identities table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Identities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Identities::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Identities::Email).string().not_null())
                    .col(
                        ColumnDef::new(Identities::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the one-identity-per-email rule under concurrent writes
        manager
            .create_index(
                Index::create()
                    .name("idx_identities_email")
                    .table(Identities::Table)
                    .col(Identities::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Identities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Identities {
    Table,
    Id,
    Email,
    PasswordHash,
}
