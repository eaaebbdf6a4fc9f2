mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use players_api::api::handlers::health_handler;
use players_api::infrastructure::cache::NullCache;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(common::create_test_pool().await);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 11 players"
    );
    assert_eq!(json["checks"]["database"]["players"], 11);
    assert_eq!(json["checks"]["cache"]["backend"], "memory");
    assert_eq!(json["checks"]["cache"]["message"], "memory backend ready");
}

#[tokio::test]
async fn test_health_endpoint_with_disabled_cache() {
    let state = common::create_test_state_with_cache(
        common::create_test_pool().await,
        Arc::new(NullCache::new()),
    );
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["message"], "disabled backend ready");
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_database_closed() {
    let pool = common::create_test_pool().await;
    let state = common::create_test_state(pool.clone());
    pool.close().await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
