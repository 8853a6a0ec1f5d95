use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Areas::Table)
                    .if_not_exists()
                    .col(pk_auto(Areas::Id))
                    .col(string_len(Areas::AreaKey, 64).unique_key().not_null())
                    .col(string_len(Areas::AreaName, 255).not_null())
                    .col(timestamp_with_time_zone(Areas::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Areas::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Areas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Areas { Table, Id, AreaKey, AreaName, CreatedAt, UpdatedAt }
