//! Integration tests for the `/api/v1/departments` and `/api/v1/instructors`
//! JSON endpoints over an in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_memory_app, get, post_json, post_raw_json, KAPOOR_ID};
use serde_json::json;

#[tokio::test]
async fn create_returns_201_with_new_id() {
    let (app, _store) = build_memory_app();

    let response = post_json(
        app.clone(),
        "/api/v1/departments",
        json!({
            "name": "Mathematics",
            "budget": "120000.00",
            "start_date": "2023-01-01",
            "administrator_id": KAPOOR_ID,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let response = get(app, &format!("/api/v1/departments/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Mathematics");
    assert_eq!(json["data"]["budget"], "120000.00");
    assert_eq!(json["data"]["start_date"], "2023-01-01");
    assert_eq!(json["data"]["administrator_id"], KAPOOR_ID);
}

#[tokio::test]
async fn invalid_payload_returns_every_violation() {
    let (app, store) = build_memory_app();

    let response = post_json(app, "/api/v1/departments", json!({ "name": "Ma" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, ["name", "budget", "start_date", "administrator_id"]);
    assert_eq!(json["errors"][0]["rule_type"], "length");
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn unparseable_budget_is_a_format_violation() {
    let (app, store) = build_memory_app();

    let response = post_json(
        app,
        "/api/v1/departments",
        json!({
            "name": "Mathematics",
            "budget": "1.234",
            "start_date": "2023-01-01",
            "administrator_id": KAPOOR_ID,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "budget");
    assert_eq!(errors[0]["rule_type"], "format");
    assert_eq!(errors[0]["message"], "The value '1.234' is not valid for Budget.");
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let (app, store) = build_memory_app();

    let response = post_raw_json(app, "/api/v1/departments", "not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn unknown_administrator_returns_sanitized_500() {
    let (app, store) = build_memory_app();

    let response = post_json(
        app,
        "/api/v1/departments",
        json!({
            "name": "Physics",
            "budget": 1000,
            "start_date": "2023-01-01",
            "administrator_id": 999,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert_eq!(store.department_count().await, 0);
}

#[tokio::test]
async fn list_returns_summaries_sorted_by_name() {
    let (app, _store) = build_memory_app();
    for name in ["Physics", "Economics"] {
        let response = post_json(
            app.clone(),
            "/api/v1/departments",
            json!({
                "name": name,
                "budget": 1000,
                "start_date": "2023-01-01",
                "administrator_id": KAPOOR_ID,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/v1/departments").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Economics");
    assert_eq!(data[0]["budget"], "1000.00");
    assert_eq!(data[0]["administrator_name"], "Kapoor, Candace");
    assert_eq!(data[1]["name"], "Physics");
}

#[tokio::test]
async fn unknown_department_returns_404() {
    let (app, _store) = build_memory_app();

    let response = get(app, "/api/v1/departments/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Department with id 42 not found");
}

#[tokio::test]
async fn instructors_are_listed() {
    let (app, _store) = build_memory_app();

    let response = get(app, "/api/v1/instructors").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["id"], KAPOOR_ID);
    assert_eq!(json["data"][0]["last_name"], "Kapoor");
}
