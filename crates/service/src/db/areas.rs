use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use models::area::{self, NewArea};
use crate::errors::ServiceError;

/// List every area, oldest first.
pub async fn list_areas(db: &DatabaseConnection) -> Result<Vec<area::Model>, ServiceError> {
    let rows = area::Entity::find().order_by_asc(area::Column::Id).all(db).await?;
    Ok(rows)
}

/// Insert a validated area. A taken key is a constraint error.
pub async fn create_area(db: &DatabaseConnection, new: NewArea) -> Result<area::Model, ServiceError> {
    Ok(area::create(db, new).await?)
}

/// Delete by key without an existence check; returns rows affected.
pub async fn delete_area(db: &DatabaseConnection, area_key: &str) -> Result<u64, ServiceError> {
    Ok(area::delete_by_key(db, area_key).await?)
}
