//! User API Tests
//!
//! Request-shape failures are exercised end-to-end; they are rejected
//! before any repository call, so no database is required.

use axum::http::StatusCode;

use crate::common::{body_string, TestApp};

#[tokio::test]
async fn register_rejects_a_malformed_email() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            r#"{"name":"Ana","email":"not-an-email","password":"secret"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Invalid email format"));
}

#[tokio::test]
async fn register_rejects_a_body_without_required_fields() {
    let app = TestApp::new();

    let response = app.post_json("/api/users", r#"{"name":"Ana"}"#).await;

    // Missing fields fail JSON extraction before the handler runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn register_rejects_an_empty_password() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/users",
            r#"{"name":"Ana","email":"ana@example.com","password":""}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
