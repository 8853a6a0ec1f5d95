use std::collections::HashMap;

use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, FromQueryResult, QuerySelect, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, shop};

/// One Wi-Fi offering: the SSID a shop broadcasts and the page to sign in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub wifi_name: String,
    pub link: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Shop }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Shop => Entity::has_many(shop::Entity).into(),
        }
    }
}

impl Related<shop::Entity> for Entity {
    fn to() -> RelationDef { Relation::Shop.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated input for a new service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWifiService {
    pub wifi_name: String,
    pub link: String,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewWifiService) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        wifi_name: Set(new.wifi_name),
        link: Set(new.link),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[derive(Debug, FromQueryResult)]
struct ShopCountRow {
    service_id: i32,
    shop_count: i64,
}

/// Shop count per service id in one grouped query. Services without shops are absent.
pub async fn shop_counts<C: ConnectionTrait>(db: &C) -> Result<HashMap<i32, u64>, errors::ModelError> {
    let rows = shop::Entity::find()
        .select_only()
        .column(shop::Column::ServiceId)
        .column_as(Expr::col(shop::Column::Id).count(), "shop_count")
        .group_by(shop::Column::ServiceId)
        .into_model::<ShopCountRow>()
        .all(db)
        .await?;
    Ok(rows
        .into_iter()
        .map(|r| (r.service_id, r.shop_count.max(0) as u64))
        .collect())
}
