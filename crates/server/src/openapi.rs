//! OpenAPI description served at `/doc/openapi.json` and rendered by `/doc`.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

/// Every error body.
#[derive(Serialize, ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterServiceDoc {
    pub wifi_name: String,
    /// Absolute http(s) URL of the login or landing page.
    pub link: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterShopDoc {
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub service_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAreaDoc {
    pub area_key: String,
    pub area_name: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterReviewDoc {
    /// 1 to 5.
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdDoc { pub service_id: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopIdDoc { pub shop_id: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIdDoc { pub review_id: i32 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaKeyDoc { pub area_key: String }

#[derive(Serialize, ToSchema)]
pub struct DeletedDoc { pub deleted: u64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceElementDoc {
    pub service_id: i32,
    pub wifi_name: String,
    pub link: String,
    pub shop_count: u64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListingDoc {
    pub total: usize,
    pub service_list: Vec<ServiceElementDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaElementDoc {
    pub area_key: String,
    pub area_name: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AreaListingDoc {
    pub total: usize,
    pub area_list: Vec<AreaElementDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopElementDoc {
    pub shop_id: i32,
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub service_id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopListingDoc {
    pub total: usize,
    pub shop_list: Vec<ShopElementDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientShopElementDoc {
    pub shop_id: i32,
    pub shop_name: String,
    pub area_key: Option<String>,
    pub address: Option<String>,
    pub wifi_name: Option<String>,
    pub link: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientShopListingDoc {
    pub total: usize,
    pub shop_list: Vec<ClientShopElementDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewElementDoc {
    pub review_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListingDoc {
    pub total: usize,
    pub review_list: Vec<ReviewElementDoc>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Find Wi-Fi API", description = "Directory of shops offering free Wi-Fi"),
    paths(
        crate::routes::health,
        crate::routes::client::list_areas,
        crate::routes::client::list_shops,
        crate::routes::client::list_reviews,
        crate::routes::client::create_review,
        crate::routes::admin::create_area,
        crate::routes::admin::delete_area,
        crate::routes::admin::list_services,
        crate::routes::admin::create_service,
        crate::routes::admin::list_shops,
        crate::routes::admin::create_shop,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            RegisterServiceDoc,
            RegisterShopDoc,
            RegisterAreaDoc,
            RegisterReviewDoc,
            ServiceIdDoc,
            ShopIdDoc,
            ReviewIdDoc,
            AreaKeyDoc,
            DeletedDoc,
            ServiceElementDoc,
            ServiceListingDoc,
            AreaElementDoc,
            AreaListingDoc,
            ShopElementDoc,
            ShopListingDoc,
            ClientShopElementDoc,
            ClientShopListingDoc,
            ReviewElementDoc,
            ReviewListingDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "client", description = "Read-mostly routes for visitors"),
        (name = "admin", description = "Directory maintenance")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/areas", "/shops", "/shops/{shop_id}/reviews", "/admin/areas", "/admin/areas/{area_key}", "/admin/services", "/admin/shops"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
