//! Health Check and Metrics API Tests

use axum::http::{header, StatusCode};

use crate::common::{body_string, TestApp};

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_reports_status_and_version() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    let json: serde_json::Value =
        serde_json::from_str(&body_string(response).await).expect("health body should be JSON");

    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn liveness_probe_always_answers() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value =
        serde_json::from_str(&body_string(response).await).expect("liveness body should be JSON");
    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn metrics_endpoint_exposes_request_counters() {
    let app = TestApp::new();

    // The first request is recorded after its response is produced, so a
    // second call observes it.
    let _ = app.get("/health").await;
    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("ledger_server_http_requests_total"));
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    let headers = response.headers();

    assert_eq!(
        headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );
    assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
}

#[tokio::test]
async fn unknown_routes_answer_404() {
    let app = TestApp::new();

    let response = app.get("/api/unknown").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
