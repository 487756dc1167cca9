//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_api::error::AppError;
use campus_core::error::CoreError;
use campus_core::validation::rules::RULE_REQUIRED;
use campus_core::validation::FieldViolation;
use http_body_util::BodyExt;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Department",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Department with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400_with_violations() {
    let err = AppError::Core(CoreError::Validation(vec![FieldViolation::new(
        "name",
        RULE_REQUIRED,
        "'Name' must not be empty.",
    )]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "name");
    assert_eq!(json["errors"][0]["message"], "'Name' must not be empty.");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Expected request with `Content-Type: application/json`".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Expected request with `Content-Type: application/json`");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn cancelled_error_returns_503() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Cancelled)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "CANCELLED");
}

#[tokio::test]
async fn persistence_error_returns_500_and_sanitizes() {
    let err = AppError::Core(CoreError::Persistence(
        "insert or update on table \"departments\" violates foreign key constraint".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(
        !json.to_string().contains("foreign key"),
        "Persistence error response must not leak details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}
