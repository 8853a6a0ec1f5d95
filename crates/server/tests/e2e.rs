use std::net::{Ipv4Addr, SocketAddr};

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        let status = res.status();
        Ok((status, res.json().await?))
    }
}

/// Serve the full router over a private in-memory database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database = DatabaseConfig::sqlite_memory();
    cfg.server.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../static").to_string();

    let db = models::db::connect_with_config(&cfg.database).await?;
    server::startup::prepare_schema(&db).await?;
    let app = server::startup::app(db, &cfg);

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");

    let res = app.client.get(app.url("/")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("Find Wi-Fi"));
    Ok(())
}

#[tokio::test]
async fn e2e_docs_are_served() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, spec) = app.get("/doc/openapi.json").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert!(spec["paths"]["/admin/services"].is_object());

    let res = app.client.get(app.url("/doc")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("redoc"));
    Ok(())
}

#[tokio::test]
async fn e2e_service_and_shop_listing() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app
        .post("/admin/services", json!({"wifiName": "CafeWiFi", "link": "https://example.com"}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"serviceId": 1}));

    let (status, body) = app
        .post("/admin/shops", json!({"shopName": "Main St", "areaKey": "shibuya", "serviceId": 1}))
        .await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"shopId": 1}));

    let (status, body) = app.get("/admin/services").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total": 1,
            "serviceList": [{"serviceId": 1, "wifiName": "CafeWiFi", "link": "https://example.com", "shopCount": 1}]
        })
    );

    let (_, admin_shops) = app.get("/admin/shops").await?;
    assert_eq!(admin_shops["shopList"][0]["serviceId"], 1);

    let (status, client_shops) = app.get("/shops").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(client_shops["total"], 1);
    assert_eq!(client_shops["shopList"][0]["wifiName"], "CafeWiFi");
    assert_eq!(client_shops["shopList"][0]["link"], "https://example.com");
    assert!(client_shops["shopList"][0].get("serviceId").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_input_is_400() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.post("/admin/services", json!({"wifiName": "", "link": ""})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "wifiName: is required; link: is required");

    let res = app
        .client
        .post(app.url("/admin/services"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(body["message"].is_string());

    let (status, _) = app.get("/shops/abc/reviews").await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let (_, listing) = app.get("/admin/services").await?;
    assert_eq!(listing["total"], 0);
    Ok(())
}

#[tokio::test]
async fn e2e_constraint_violations_are_409() -> anyhow::Result<()> {
    let app = start_server().await?;

    let (status, body) = app.post("/admin/shops", json!({"shopName": "Ghost", "serviceId": 42})).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    assert!(body["message"].is_string());

    let area = json!({"areaKey": "shibuya", "areaName": "Shibuya"});
    let (status, body) = app.post("/admin/areas", area.clone()).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"areaKey": "shibuya"}));
    let (status, _) = app.post("/admin/areas", area).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn e2e_area_delete_is_lenient() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/admin/areas", json!({"areaKey": "ueno", "areaName": "Ueno"})).await?;

    let res = app.client.delete(app.url("/admin/areas/shinjuku")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"deleted": 0}));

    let res = app.client.delete(app.url("/admin/areas/ueno")).send().await?;
    assert_eq!(res.json::<Value>().await?, json!({"deleted": 1}));

    let (_, areas) = app.get("/areas").await?;
    assert_eq!(areas, json!({"total": 0, "areaList": []}));
    Ok(())
}

#[tokio::test]
async fn e2e_reviews() -> anyhow::Result<()> {
    let app = start_server().await?;
    app.post("/admin/services", json!({"wifiName": "CafeWiFi", "link": "https://example.com"})).await?;
    app.post("/admin/shops", json!({"shopName": "Main St", "serviceId": 1})).await?;

    let (status, body) = app.post("/shops/1/reviews", json!({"rating": 5, "comment": "fast and stable"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body, json!({"reviewId": 1}));

    let (status, _) = app.post("/shops/1/reviews", json!({"rating": 0})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);

    let (status, _) = app.post("/shops/9/reviews", json!({"rating": 3})).await?;
    assert_eq!(status, HttpStatusCode::CONFLICT);

    let (status, body) = app.get("/shops/1/reviews").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(
        body,
        json!({"total": 1, "reviewList": [{"reviewId": 1, "rating": 5, "comment": "fast and stable"}]})
    );
    Ok(())
}
