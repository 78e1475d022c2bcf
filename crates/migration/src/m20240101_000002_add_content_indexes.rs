use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_content::Content;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Content: range filter on year_of_release
        manager
            .create_index(
                Index::create()
                    .name("idx_content_year_of_release")
                    .table(Content::Table)
                    .col(Content::YearOfRelease)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_content_year_of_release")
                    .table(Content::Table)
                    .to_owned(),
            )
            .await
    }
}
