//! Outward response envelopes.
//!
//! Only the fields listed here leave the service layer; timestamps and raw
//! child foreign keys stay internal.

use models::{area, review, shop, wifi_service};
use serde::{Deserialize, Serialize};

/// A service row together with how many shops offer it.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceWithShopCount {
    pub service: wifi_service::Model,
    pub shop_count: u64,
}

/// A shop row joined with the service it offers.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopWithService {
    pub shop: shop::Model,
    pub service: Option<wifi_service::Model>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListingElement {
    pub service_id: i32,
    pub wifi_name: String,
    pub link: String,
    pub shop_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListingResponse {
    pub total: usize,
    pub service_list: Vec<ServiceListingElement>,
}

impl From<ServiceWithShopCount> for ServiceListingElement {
    fn from(row: ServiceWithShopCount) -> Self {
        Self {
            service_id: row.service.id,
            wifi_name: row.service.wifi_name,
            link: row.service.link,
            shop_count: row.shop_count,
        }
    }
}

impl From<Vec<ServiceWithShopCount>> for ServiceListingResponse {
    fn from(rows: Vec<ServiceWithShopCount>) -> Self {
        let service_list: Vec<ServiceListingElement> = rows.into_iter().map(Into::into).collect();
        Self { total: service_list.len(), service_list }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdResponse {
    pub service_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaElement {
    pub area_key: String,
    pub area_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaListingResponse {
    pub total: usize,
    pub area_list: Vec<AreaElement>,
}

impl From<Vec<area::Model>> for AreaListingResponse {
    fn from(rows: Vec<area::Model>) -> Self {
        let area_list: Vec<AreaElement> = rows
            .into_iter()
            .map(|a| AreaElement { area_key: a.area_key, area_name: a.area_name })
            .collect();
        Self { total: area_list.len(), area_list }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaKeyResponse {
    pub area_key: String,
}

/// Rows removed by a delete; zero when the key did not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub deleted: u64,
}

/// Admin view of a shop: keeps the service reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopElement {
    pub shop_id: i32,
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub service_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListingResponse {
    pub total: usize,
    pub shop_list: Vec<ShopElement>,
}

impl From<Vec<shop::Model>> for ShopListingResponse {
    fn from(rows: Vec<shop::Model>) -> Self {
        let shop_list: Vec<ShopElement> = rows
            .into_iter()
            .map(|s| ShopElement {
                shop_id: s.id,
                shop_name: s.shop_name,
                area_key: s.area_key,
                address: s.address,
                service_id: s.service_id,
            })
            .collect();
        Self { total: shop_list.len(), shop_list }
    }
}

/// Client view of a shop: the service reference is replaced by what a
/// visitor needs to connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientShopElement {
    pub shop_id: i32,
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub wifi_name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientShopListingResponse {
    pub total: usize,
    pub shop_list: Vec<ClientShopElement>,
}

impl From<Vec<ShopWithService>> for ClientShopListingResponse {
    fn from(rows: Vec<ShopWithService>) -> Self {
        let shop_list: Vec<ClientShopElement> = rows
            .into_iter()
            .map(|row| {
                let (wifi_name, link) = match row.service {
                    Some(s) => (Some(s.wifi_name), Some(s.link)),
                    None => (None, None),
                };
                ClientShopElement {
                    shop_id: row.shop.id,
                    shop_name: row.shop.shop_name,
                    area_key: row.shop.area_key,
                    address: row.shop.address,
                    wifi_name,
                    link,
                }
            })
            .collect();
        Self { total: shop_list.len(), shop_list }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopIdResponse {
    pub shop_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewElement {
    pub review_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListingResponse {
    pub total: usize,
    pub review_list: Vec<ReviewElement>,
}

impl From<Vec<review::Model>> for ReviewListingResponse {
    fn from(rows: Vec<review::Model>) -> Self {
        let review_list: Vec<ReviewElement> = rows
            .into_iter()
            .map(|r| ReviewElement { review_id: r.id, rating: r.rating, comment: r.comment })
            .collect();
        Self { total: review_list.len(), review_list }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIdResponse {
    pub review_id: i32,
}
