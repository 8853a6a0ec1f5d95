use std::{path::Path, time::Duration};

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{openapi::ApiDoc, state::AppState};

pub mod admin;
pub mod client;

pub async fn hello() -> &'static str {
    "Hello, Find Wi-Fi!"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public, client and admin routes plus the API docs.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str, request_timeout: Duration) -> Router {
    let docs = Router::new()
        .route_service("/doc", ServeFile::new(Path::new(static_dir).join("redoc.html")))
        .route("/doc/openapi.json", get(openapi_json));

    let client_routes = Router::new()
        .route("/areas", get(client::list_areas))
        .route("/shops", get(client::list_shops))
        .route("/shops/:shop_id/reviews", get(client::list_reviews).post(client::create_review));

    let admin_routes = Router::new()
        .route("/admin/areas", post(admin::create_area))
        .route("/admin/areas/:area_key", delete(admin::delete_area))
        .route("/admin/services", get(admin::list_services).post(admin::create_service))
        .route("/admin/shops", get(admin::list_shops).post(admin::create_shop));

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .merge(docs)
        .merge(client_routes)
        .merge(admin_routes)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
