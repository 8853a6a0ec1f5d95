use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::wifi_service::{self, NewWifiService};
use crate::{errors::ServiceError, responses::ServiceWithShopCount};

/// List every service with its shop count: one query for the services, one
/// grouped count over shops.
pub async fn list_services_with_shop_counts(db: &DatabaseConnection) -> Result<Vec<ServiceWithShopCount>, ServiceError> {
    let services = wifi_service::Entity::find()
        .order_by_asc(wifi_service::Column::Id)
        .all(db)
        .await?;
    let counts = wifi_service::shop_counts(db).await?;
    Ok(services
        .into_iter()
        .map(|service| {
            let shop_count = counts.get(&service.id).copied().unwrap_or(0);
            ServiceWithShopCount { service, shop_count }
        })
        .collect())
}

/// Insert a validated service.
pub async fn create_service(db: &DatabaseConnection, new: NewWifiService) -> Result<wifi_service::Model, ServiceError> {
    Ok(wifi_service::create(db, new).await?)
}
