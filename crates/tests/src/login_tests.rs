use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::directory::{CREDENTIALS_REQUIRED, INVALID_CREDENTIALS};

use crate::common::{self, DOCTOR_EMAIL, DOCTOR_PASSWORD, PATIENT_EMAIL, PATIENT_PASSWORD};

#[tokio::test]
async fn test_login_returns_user_with_roles() {
    let app = common::test_app();

    let body = common::login_body(DOCTOR_EMAIL, DOCTOR_PASSWORD);
    let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        json!({
            "user": {
                "email": DOCTOR_EMAIL,
                "fullName": "Анна Зубова",
                "roles": ["doctor", "admin"],
                "activeRole": "doctor"
            }
        })
    );
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = common::test_app();

    let body = common::login_body("  Doctor@Clinic.TEST ", DOCTOR_PASSWORD);
    let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["user"]["email"], DOCTOR_EMAIL);
}

#[tokio::test]
async fn test_login_missing_active_role_defaults_to_first() {
    let app = common::test_app();

    let body = common::login_body(PATIENT_EMAIL, PATIENT_PASSWORD);
    let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["user"]["activeRole"], "patient");
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let app = common::test_app();

    let body = common::login_body(DOCTOR_EMAIL, "not-the-password");
    let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response, json!({ "error": INVALID_CREDENTIALS }));
}

#[tokio::test]
async fn test_login_unknown_email_is_401() {
    let app = common::test_app();

    let body = common::login_body("nobody@clinic.test", DOCTOR_PASSWORD);
    let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["error"], INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_login_blank_fields_are_400() {
    let app = common::test_app();

    for body in [
        common::login_body("", DOCTOR_PASSWORD),
        common::login_body(DOCTOR_EMAIL, ""),
        common::login_body("   ", "   "),
        "{}".to_string(),
    ] {
        let (status, response) = common::post_json(&app, "/api/auth/login", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response["error"], CREDENTIALS_REQUIRED);
    }
}

#[tokio::test]
async fn test_login_malformed_json_is_400() {
    let app = common::test_app();

    let (status, response) = common::post_json(&app, "/api/auth/login", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].is_string());
}
