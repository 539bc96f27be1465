mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use cat_gif::api::handlers::health_handler;
use cat_gif::infrastructure::store::{MemoryGifStore, NullGifStore};
use cat_gif::state::AppState;
use common::{DownStore, StubProvider};
use std::sync::Arc;

fn health_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(
        Arc::new(MemoryGifStore::new()),
        Arc::new(StubProvider::default()),
        true,
    );
    let server = health_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let state = common::create_test_state(
        Arc::new(MemoryGifStore::new()),
        Arc::new(StubProvider::default()),
        true,
    );
    let server = health_server(state);

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["checks"].get("store").is_some());
}

#[tokio::test]
async fn test_health_degraded_when_store_down() {
    let state = common::create_test_state(
        Arc::new(DownStore),
        Arc::new(StubProvider::default()),
        true,
    );
    let server = health_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_without_store_reports_disabled() {
    let state = common::create_test_state(
        Arc::new(NullGifStore::new()),
        Arc::new(StubProvider::default()),
        false,
    );
    let server = health_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["message"], "Caching disabled");
}
