//! Calculation Endpoint Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::spawn_app;

/// Multiplying "3" by "4" round-trips to 12
#[tokio::test]
async fn test_multiplication_round_trip() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "3", "num2": "4", "operator": "*" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": 12.0 }));
}

/// Subtracting "3" from "10" returns 7
#[tokio::test]
async fn test_subtraction_round_trip() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "10", "num2": "3", "operator": "-" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": 7.0 }));
}

/// Addition of fractional operands
#[tokio::test]
async fn test_addition_with_fractional_operands() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "1.5", "num2": "2.25", "operator": "+" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": 3.75 }));
}

/// Division returns the exact quotient
#[tokio::test]
async fn test_division() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "10", "num2": "4", "operator": "/" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": 2.5 }));
}

/// An unrecognized operator returns the tagged error with HTTP 200
#[tokio::test]
async fn test_unrecognized_operator_returns_error_with_200() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "1", "num2": "2", "operator": "%" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid operator" }));
}

/// Division by zero follows floating-point semantics; the non-finite
/// result serializes as JSON null
#[tokio::test]
async fn test_division_by_zero_serializes_as_null() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "1", "num2": "0", "operator": "/" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": null }));
}

/// Malformed operands are not rejected; they become NaN, which
/// serializes as JSON null
#[tokio::test]
async fn test_malformed_operand_is_forwarded_not_rejected() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .json(&json!({ "num1": "abc", "num2": "4", "operator": "+" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "result": null }));
}

/// A body that is not valid JSON is a transport failure, not a
/// calculation outcome
#[tokio::test]
async fn test_non_json_body_returns_400() {
    let server = spawn_app();

    let response = server
        .post("/calculate")
        .content_type("application/json")
        .text("this is not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body.get("message").is_some());
}

/// The metrics endpoint exposes the calculation counter once at least
/// one calculation has been recorded
#[tokio::test]
async fn test_metrics_counts_calculations() {
    let server = spawn_app();

    server
        .post("/calculate")
        .json(&json!({ "num1": "2", "num2": "2", "operator": "+" }))
        .await;

    let response = server.get("/metrics").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("calc_server_calculations_total"));
}

/// The root page serves the calculator form
#[tokio::test]
async fn test_index_serves_calculator_form() {
    let server = spawn_app();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("<form"));
    assert!(body.contains("/calculate"));
}

/// Unknown routes return the 404 error envelope
#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = spawn_app();

    let response = server.get("/no-such-route").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
