use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shops::Table)
                    .if_not_exists()
                    .col(pk_auto(Shops::Id))
                    .col(string_len(Shops::ShopName, 255).not_null())
                    // Plain reference to areas.area_key; intentionally not a foreign key
                    .col(string_len_null(Shops::AreaKey, 64))
                    .col(string_len_null(Shops::Address, 512))
                    .col(integer(Shops::ServiceId).not_null())
                    .col(timestamp_with_time_zone(Shops::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Shops::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_service")
                            .from(Shops::Table, Shops::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shops::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shops {
    Table,
    Id,
    ShopName,
    AreaKey,
    Address,
    ServiceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Services { Table, Id }
