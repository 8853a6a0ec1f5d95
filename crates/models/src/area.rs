use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// A named region, addressed by its `area_key`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "areas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub area_key: String,
    pub area_name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// Shops carry an `area_key` column but it is not a foreign key.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Validated input for a new area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewArea {
    pub area_key: String,
    pub area_name: String,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewArea) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        area_key: Set(new.area_key),
        area_name: Set(new.area_name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Delete by key. Missing keys are not an error; the affected row count is returned.
pub async fn delete_by_key<C: ConnectionTrait>(db: &C, area_key: &str) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::AreaKey.eq(area_key))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
