use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use service::{
    requests::RegisterReviewRequest,
    responses::{AreaListingResponse, ClientShopListingResponse, ReviewIdResponse, ReviewListingResponse},
};

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/areas", tag = "client",
    responses(
        (status = 200, description = "All areas", body = crate::openapi::AreaListingDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_areas(State(state): State<AppState>) -> Result<Json<AreaListingResponse>, ApiError> {
    Ok(Json(state.directory.areas.list().await?))
}

#[utoipa::path(
    get, path = "/shops", tag = "client",
    responses(
        (status = 200, description = "Shops with the Wi-Fi they offer", body = crate::openapi::ClientShopListingDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_shops(State(state): State<AppState>) -> Result<Json<ClientShopListingResponse>, ApiError> {
    Ok(Json(state.directory.shops.list_for_clients().await?))
}

#[utoipa::path(
    get, path = "/shops/{shop_id}/reviews", tag = "client",
    params(("shop_id" = i32, Path, description = "Shop id")),
    responses(
        (status = 200, description = "Reviews of the shop", body = crate::openapi::ReviewListingDoc),
        (status = 400, description = "Malformed shop id", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ReviewListingResponse>, ApiError> {
    let Path(shop_id) = path?;
    Ok(Json(state.directory.reviews.list(shop_id).await?))
}

#[utoipa::path(
    post, path = "/shops/{shop_id}/reviews", tag = "client",
    params(("shop_id" = i32, Path, description = "Shop id")),
    request_body = crate::openapi::RegisterReviewDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ReviewIdDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "Unknown shop", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store Failure", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<RegisterReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewIdResponse>, ApiError> {
    let Path(shop_id) = path?;
    let Json(req) = payload?;
    Ok(Json(state.directory.reviews.create(shop_id, req).await?))
}
