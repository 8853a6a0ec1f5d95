use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shops: grouped shop counts per service
        manager
            .create_index(
                Index::create()
                    .name("idx_shop_service")
                    .table(Shops::Table)
                    .col(Shops::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Reviews: listing per shop
        manager
            .create_index(
                Index::create()
                    .name("idx_review_shop")
                    .table(Reviews::Table)
                    .col(Reviews::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_review_shop").table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shop_service").table(Shops::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Shops { Table, ServiceId }

#[derive(DeriveIden)]
enum Reviews { Table, ShopId }
