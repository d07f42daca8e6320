//! Service info, health, OpenAPI, and CORS tests.

mod helpers;

use helpers::setup_test_app;
use serde_json::Value;

#[tokio::test]
async fn test_root_reports_running() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Gallery image server is running");
    assert_eq!(body["port"], "5174");
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_openapi_lists_endpoints() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let spec: Value = response.json();
    assert!(spec["paths"].get("/upload").is_some());
    assert!(spec["paths"].get("/api/images").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/api/images")
        .add_header("Origin", "http://localhost:5173")
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.header("access-control-allow-origin"),
        "*"
    );
}

#[tokio::test]
async fn test_invalid_config_fails_initialization() {
    let temp_dir = tempfile::tempdir().expect("temp dir");
    let mut config = helpers::create_test_config(temp_dir.path());
    config.public_base_url = "not-a-url".to_string();

    let result = gallery_api::setup::initialize_app(config).await;
    assert!(result.is_err());
}
