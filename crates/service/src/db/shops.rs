use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::{shop::{self, NewShop}, wifi_service};
use crate::{errors::ServiceError, responses::ShopWithService};

/// List every shop, oldest first.
pub async fn list_shops(db: &DatabaseConnection) -> Result<Vec<shop::Model>, ServiceError> {
    let rows = shop::Entity::find().order_by_asc(shop::Column::Id).all(db).await?;
    Ok(rows)
}

/// List every shop joined with its service in a single query.
pub async fn list_shops_with_services(db: &DatabaseConnection) -> Result<Vec<ShopWithService>, ServiceError> {
    let rows = shop::Entity::find()
        .find_also_related(wifi_service::Entity)
        .order_by_asc(shop::Column::Id)
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|(shop, service)| ShopWithService { shop, service })
        .collect())
}

/// Insert a validated shop; an unknown service id is a constraint error.
pub async fn create_shop(db: &DatabaseConnection, new: NewShop) -> Result<shop::Model, ServiceError> {
    Ok(shop::create(db, new).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::wifi_service::NewWifiService;

    #[tokio::test]
    async fn shops_join_their_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let svc = wifi_service::create(&db, NewWifiService { wifi_name: "CafeWiFi".into(), link: "https://example.com".into() }).await?;
        create_shop(&db, NewShop { shop_name: "Main St".into(), area_key: Some("shibuya".into()), address: None, service_id: svc.id }).await?;

        let plain = list_shops(&db).await?;
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].service_id, svc.id);

        let joined = list_shops_with_services(&db).await?;
        assert_eq!(joined[0].service.as_ref().map(|s| s.wifi_name.as_str()), Some("CafeWiFi"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_service_is_constraint_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let err = create_shop(&db, NewShop { shop_name: "Ghost".into(), area_key: None, address: None, service_id: 99 })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Constraint(_)), "unexpected: {err:?}");
        assert!(list_shops(&db).await?.is_empty());
        Ok(())
    }
}
