use axum::http::{Method, StatusCode};

use crate::common;

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = common::test_app();

    let (status, response) = common::request(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["users"], 2);
    assert!(response["version"].is_string());
}

#[tokio::test]
async fn test_docs_are_off_by_default() {
    let app = common::test_app();

    let (status, _) = common::request(&app, Method::GET, "/docs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_docs_served_when_enabled() {
    let mut config = common::test_config();
    config.features.docs = true;
    let app = server::api_router(&config);

    let (status, _) = common::request(&app, Method::GET, "/docs").await;

    assert_eq!(status, StatusCode::OK);
}
