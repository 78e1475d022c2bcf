//! Create `content` table.
//!
//! One row per content item; `id` is assigned by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(big_integer(Content::Id).auto_increment().primary_key())
                    .col(string_len(Content::Title, 255).not_null())
                    .col(text_null(Content::Description))
                    .col(big_integer_null(Content::YearOfRelease))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Content::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Content {
    Table,
    Id,
    Title,
    Description,
    YearOfRelease,
}
