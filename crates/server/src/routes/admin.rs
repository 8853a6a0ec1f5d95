use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use service::{
    requests::{RegisterAreaRequest, RegisterServiceRequest, RegisterShopRequest},
    responses::{AreaKeyResponse, DeletedResponse, ServiceIdResponse, ServiceListingResponse, ShopIdResponse, ShopListingResponse},
};

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/admin/areas", tag = "admin",
    request_body = crate::openapi::RegisterAreaDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::AreaKeyDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "Area key already taken", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_area(
    State(state): State<AppState>,
    payload: Result<Json<RegisterAreaRequest>, JsonRejection>,
) -> Result<Json<AreaKeyResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.directory.areas.create(req).await?))
}

#[utoipa::path(
    delete, path = "/admin/areas/{area_key}", tag = "admin",
    params(("area_key" = String, Path, description = "Key of the area to delete")),
    responses(
        (status = 200, description = "Rows deleted, 0 when the key was unknown", body = crate::openapi::DeletedDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_area(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(area_key) = path?;
    Ok(Json(state.directory.areas.delete(&area_key).await?))
}

#[utoipa::path(
    get, path = "/admin/services", tag = "admin",
    responses(
        (status = 200, description = "Services with their shop counts", body = crate::openapi::ServiceListingDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<ServiceListingResponse>, ApiError> {
    Ok(Json(state.directory.services.list().await?))
}

#[utoipa::path(
    post, path = "/admin/services", tag = "admin",
    request_body = crate::openapi::RegisterServiceDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ServiceIdDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<RegisterServiceRequest>, JsonRejection>,
) -> Result<Json<ServiceIdResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.directory.services.create(req).await?))
}

#[utoipa::path(
    get, path = "/admin/shops", tag = "admin",
    responses(
        (status = 200, description = "Shops with their service id", body = crate::openapi::ShopListingDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_shops(State(state): State<AppState>) -> Result<Json<ShopListingResponse>, ApiError> {
    Ok(Json(state.directory.shops.list().await?))
}

#[utoipa::path(
    post, path = "/admin/shops", tag = "admin",
    request_body = crate::openapi::RegisterShopDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ShopIdDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "Unknown service", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_shop(
    State(state): State<AppState>,
    payload: Result<Json<RegisterShopRequest>, JsonRejection>,
) -> Result<Json<ShopIdResponse>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.directory.shops.create(req).await?))
}
