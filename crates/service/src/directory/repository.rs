use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::{
    area::{self, NewArea},
    review::{self, NewReview},
    shop::{self, NewShop},
    wifi_service::{self, NewWifiService},
};

use crate::{
    db,
    errors::ServiceError,
    responses::{ServiceWithShopCount, ShopWithService},
};

#[async_trait]
pub trait AreaRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<area::Model>, ServiceError>;
    async fn create(&self, new: NewArea) -> Result<area::Model, ServiceError>;
    async fn delete_by_key(&self, area_key: &str) -> Result<u64, ServiceError>;
}

#[async_trait]
pub trait WifiServiceRepository: Send + Sync {
    async fn list_with_shop_counts(&self) -> Result<Vec<ServiceWithShopCount>, ServiceError>;
    async fn create(&self, new: NewWifiService) -> Result<wifi_service::Model, ServiceError>;
}

#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<shop::Model>, ServiceError>;
    async fn list_with_services(&self) -> Result<Vec<ShopWithService>, ServiceError>;
    async fn create(&self, new: NewShop) -> Result<shop::Model, ServiceError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list_by_shop(&self, shop_id: i32) -> Result<Vec<review::Model>, ServiceError>;
    async fn create(&self, new: NewReview) -> Result<review::Model, ServiceError>;
}

/// SeaORM-backed repository implementation for every directory table.
#[derive(Clone)]
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AreaRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<area::Model>, ServiceError> {
        db::areas::list_areas(&self.db).await
    }

    async fn create(&self, new: NewArea) -> Result<area::Model, ServiceError> {
        db::areas::create_area(&self.db, new).await
    }

    async fn delete_by_key(&self, area_key: &str) -> Result<u64, ServiceError> {
        db::areas::delete_area(&self.db, area_key).await
    }
}

#[async_trait]
impl WifiServiceRepository for SeaOrmRepository {
    async fn list_with_shop_counts(&self) -> Result<Vec<ServiceWithShopCount>, ServiceError> {
        db::wifi_services::list_services_with_shop_counts(&self.db).await
    }

    async fn create(&self, new: NewWifiService) -> Result<wifi_service::Model, ServiceError> {
        db::wifi_services::create_service(&self.db, new).await
    }
}

#[async_trait]
impl ShopRepository for SeaOrmRepository {
    async fn list(&self) -> Result<Vec<shop::Model>, ServiceError> {
        db::shops::list_shops(&self.db).await
    }

    async fn list_with_services(&self) -> Result<Vec<ShopWithService>, ServiceError> {
        db::shops::list_shops_with_services(&self.db).await
    }

    async fn create(&self, new: NewShop) -> Result<shop::Model, ServiceError> {
        db::shops::create_shop(&self.db, new).await
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmRepository {
    async fn list_by_shop(&self, shop_id: i32) -> Result<Vec<review::Model>, ServiceError> {
        db::reviews::list_reviews_by_shop(&self.db, shop_id).await
    }

    async fn create(&self, new: NewReview) -> Result<review::Model, ServiceError> {
        db::reviews::create_review(&self.db, new).await
    }
}
