use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn test_get_on_auth_routes_is_405() {
    let app = common::test_app();

    for uri in ["/api/auth/login", "/api/auth/register"] {
        let (status, response) = common::request(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(response, json!({ "error": "Method not allowed" }));
    }
}

#[tokio::test]
async fn test_put_on_login_is_405() {
    let app = common::test_app();

    let (status, response) = common::request(&app, Method::PUT, "/api/auth/login").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response["error"], "Method not allowed");
}

#[tokio::test]
async fn test_bare_options_is_200() {
    let app = common::test_app();

    let (status, _) = common::request(&app, Method::OPTIONS, "/api/auth/login").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_allows_post() {
    let app = common::test_app();

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/auth/login")
        .header("origin", "http://localhost:8080")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = common::send_raw(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST"), "allowed methods: {methods}");
    assert_eq!(headers["access-control-max-age"], "86400");
}

#[tokio::test]
async fn test_simple_post_carries_cors_origin() {
    let app = common::test_app();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header("origin", "http://localhost:8080")
        .header("content-type", "application/json")
        .body(Body::from(common::login_body("nobody@clinic.test", "x")))
        .unwrap();
    let (status, headers, _) = common::send_raw(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(headers["access-control-allow-origin"], "*");
}
