//! Entry API Tests
//!
//! Enum-membership and query-shape failures are exercised end-to-end; they
//! are rejected before any repository call, so no database is required.

use axum::http::StatusCode;

use crate::common::{body_string, TestApp};

#[tokio::test]
async fn create_rejects_an_unknown_kind_string() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/entries",
            r#"{"description":"Rent","month":3,"year":2024,"amount":100.0,"type":"TRANSFER"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid type");
}

#[tokio::test]
async fn create_rejects_an_unknown_status_string() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/entries",
            r#"{"description":"Rent","type":"EXPENSE","status":"DONE"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid status");
}

#[tokio::test]
async fn create_rejects_lowercase_member_names() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/entries", r#"{"type":"income"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid type");
}

#[tokio::test]
async fn status_change_rejects_an_unknown_status() {
    let app = TestApp::new();

    let response = app
        .put_json("/api/entries/1/status", r#"{"status":"DONE"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid status");
}

#[tokio::test]
async fn status_change_rejects_a_missing_status() {
    let app = TestApp::new();

    let response = app.put_json("/api/entries/1/status", r#"{}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "invalid status");
}

#[tokio::test]
async fn search_requires_the_user_parameter() {
    let app = TestApp::new();

    let response = app.get("/api/entries?descricao=rent").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
