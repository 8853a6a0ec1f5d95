use sea_orm::{entity::prelude::*, sea_query::ForeignKeyAction, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, review, wifi_service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub service_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { WifiService, Review }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::WifiService => Entity::belongs_to(wifi_service::Entity)
                .from(Column::ServiceId)
                .to(wifi_service::Column::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Restrict)
                .into(),
            Relation::Review => Entity::has_many(review::Entity).into(),
        }
    }
}

impl Related<wifi_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::WifiService.def() }
}

impl Related<review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Review.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated input for a new shop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewShop {
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub service_id: i32,
}

/// Insert a shop. The `service_id` foreign key is enforced by the store, so a
/// dangling reference comes back as [`errors::ModelError::Constraint`].
pub async fn create<C: ConnectionTrait>(db: &C, new: NewShop) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        shop_name: Set(new.shop_name),
        area_key: Set(new.area_key),
        address: Set(new.address),
        service_id: Set(new.service_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
