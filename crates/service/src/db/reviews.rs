use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use models::review::{self, NewReview};
use crate::errors::ServiceError;

/// Reviews of one shop, oldest first. An unknown shop simply has none.
pub async fn list_reviews_by_shop(db: &DatabaseConnection, shop_id: i32) -> Result<Vec<review::Model>, ServiceError> {
    let rows = review::Entity::find()
        .filter(review::Column::ShopId.eq(shop_id))
        .order_by_asc(review::Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a validated review; an unknown shop id is a constraint error.
pub async fn create_review(db: &DatabaseConnection, new: NewReview) -> Result<review::Model, ServiceError> {
    Ok(review::create(db, new).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::{shop::{self, NewShop}, wifi_service::{self, NewWifiService}};

    #[tokio::test]
    async fn reviews_are_scoped_to_their_shop() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let svc = wifi_service::create(&db, NewWifiService { wifi_name: "CafeWiFi".into(), link: "https://example.com".into() }).await?;
        let first = shop::create(&db, NewShop { shop_name: "First".into(), area_key: None, address: None, service_id: svc.id }).await?;
        let second = shop::create(&db, NewShop { shop_name: "Second".into(), area_key: None, address: None, service_id: svc.id }).await?;

        create_review(&db, NewReview { shop_id: first.id, rating: 5, comment: Some("fast".into()) }).await?;
        create_review(&db, NewReview { shop_id: second.id, rating: 1, comment: None }).await?;

        let reviews = list_reviews_by_shop(&db, first.id).await?;
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].comment.as_deref(), Some("fast"));
        assert!(list_reviews_by_shop(&db, 404).await?.is_empty());

        let err = create_review(&db, NewReview { shop_id: 404, rating: 3, comment: None }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Constraint(_)));
        Ok(())
    }
}
