//! Health Check API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::spawn_app;

/// Basic health check returns 200 with a status field
#[tokio::test]
async fn test_health_check_returns_ok() {
    let server = spawn_app();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("version").is_some());
}

/// Liveness probe always returns 200
#[tokio::test]
async fn test_liveness_probe() {
    let server = spawn_app();

    let response = server.get("/health/live").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "alive");
}

/// Readiness probe reports uptime and environment
#[tokio::test]
async fn test_readiness_probe() {
    let server = spawn_app();

    let response = server.get("/health/ready").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["environment"], "test");
    assert!(body.get("uptime_seconds").is_some());
    assert!(body.get("started_at").is_some());
}
