use axum::{http::StatusCode, routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use session::{
    AuthClient, AuthError, FormMode, HttpAuthClient, SessionController, ViewState,
    CONNECTION_FAILED,
};
use shared_types::{ClientConfig, LoginRequest, Role};

use crate::common::{self, DOCTOR_EMAIL, DOCTOR_PASSWORD};

fn client_for(base: &str) -> HttpAuthClient {
    HttpAuthClient::new(ClientConfig::new(base))
}

/// Endpoint stand-in that always answers with `status` and `body`.
fn canned(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/auth/login",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

fn signed_in_form(ctl: &mut SessionController, email: &str, password: &str) {
    ctl.pick_role(Role::Doctor);
    ctl.set_email(email);
    ctl.set_password(password);
}

#[tokio::test]
async fn test_success_response_logs_in_with_active_role() {
    let base = common::spawn(canned(
        StatusCode::OK,
        json!({
            "user": {
                "email": "a@b.com",
                "fullName": "A B",
                "roles": ["doctor", "admin"],
                "activeRole": "doctor"
            }
        }),
    ))
    .await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, "a@b.com", "x");

    assert!(ctl.submit(&client).await);

    assert_eq!(ctl.state(), ViewState::LoggedIn);
    let session = ctl.session().unwrap();
    assert_eq!(session.email(), "a@b.com");
    assert_eq!(session.full_name(), "A B");
    assert_eq!(session.roles(), &[Role::Doctor, Role::Admin]);
    assert_eq!(ctl.active_role(), Some(Role::Doctor));

    // Switching only moves between granted roles.
    assert!(ctl.switch_role(Role::Admin));
    assert_eq!(ctl.active_role(), Some(Role::Admin));
    assert!(!ctl.switch_role(Role::Nurse));
    assert_eq!(ctl.active_role(), Some(Role::Admin));
}

#[tokio::test]
async fn test_rejection_surfaces_server_reason() {
    let base = common::spawn(canned(
        StatusCode::UNAUTHORIZED,
        json!({ "error": "bad credentials" }),
    ))
    .await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, "a@b.com", "wrong");

    assert!(!ctl.submit(&client).await);

    assert_eq!(ctl.state(), ViewState::LoggedOut);
    assert_eq!(ctl.last_error(), Some("bad credentials"));
    assert!(!ctl.is_authenticating());
    assert!(ctl.session().is_none());
}

#[tokio::test]
async fn test_rejection_without_reason_uses_generic_message() {
    let base = common::spawn(canned(StatusCode::INTERNAL_SERVER_ERROR, json!({}))).await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, "a@b.com", "x");

    assert!(!ctl.submit(&client).await);

    assert_eq!(ctl.last_error(), Some(CONNECTION_FAILED));
}

#[tokio::test]
async fn test_unknown_role_in_response_is_a_failure() {
    let base = common::spawn(canned(
        StatusCode::OK,
        json!({
            "user": {
                "email": "a@b.com",
                "fullName": "A B",
                "roles": ["janitor"],
                "activeRole": "janitor"
            }
        }),
    ))
    .await;
    let client = client_for(&base);

    let result = client
        .login(&LoginRequest {
            email: "a@b.com".into(),
            password: "x".into(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::Transport(_))), "{result:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, "a@b.com", "x");

    assert!(!ctl.submit(&client).await);

    assert_eq!(ctl.state(), ViewState::LoggedOut);
    assert_eq!(ctl.last_error(), Some(CONNECTION_FAILED));
}

#[tokio::test]
async fn test_login_against_service_then_logout() {
    let base = common::spawn(common::test_app()).await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, DOCTOR_EMAIL, DOCTOR_PASSWORD);

    assert!(ctl.submit(&client).await);
    assert_eq!(ctl.active_role(), Some(Role::Doctor));
    assert!(ctl.switch_role(Role::Admin));

    ctl.logout();

    assert_eq!(ctl.state(), ViewState::LoggedOut);
    assert!(ctl.session().is_none());
    assert!(ctl.credentials().email.is_empty());
    assert!(ctl.credentials().password.is_empty());
    assert_eq!(ctl.last_error(), None);
}

#[tokio::test]
async fn test_wrong_password_against_service() {
    let base = common::spawn(common::test_app()).await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, DOCTOR_EMAIL, "nope");

    assert!(!ctl.submit(&client).await);

    assert_eq!(ctl.last_error(), Some(server::directory::INVALID_CREDENTIALS));
    // Credentials survive a failed attempt so the user can retry.
    assert_eq!(ctl.credentials().email, DOCTOR_EMAIL);
    assert!(ctl.can_submit());
}

#[tokio::test]
async fn test_register_against_service_signs_in_as_patient() {
    let base = common::spawn(common::test_app()).await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    ctl.pick_role(Role::Patient);
    ctl.set_mode(FormMode::Register);
    ctl.set_email("new-patient@clinic.test");
    ctl.set_password("secret1");
    assert!(!ctl.can_submit(), "full name still missing");
    ctl.set_full_name("Мария Иванова");

    assert!(ctl.submit(&client).await);

    let session = ctl.session().unwrap();
    assert_eq!(session.roles(), &[Role::Patient]);
    assert_eq!(session.active_role(), Role::Patient);
    assert_eq!(session.full_name(), "Мария Иванова");
}

#[tokio::test]
async fn test_response_after_logout_is_dropped() {
    let base = common::spawn(common::test_app()).await;
    let client = client_for(&base);
    let mut ctl = SessionController::new();
    signed_in_form(&mut ctl, DOCTOR_EMAIL, DOCTOR_PASSWORD);

    let pending = ctl.begin_submit().unwrap();
    assert_eq!(ctl.state(), ViewState::Authenticating);
    ctl.logout();

    let outcome = pending.send(&client).await;
    assert!(outcome.is_ok());
    assert!(!ctl.finish_submit(pending.ticket(), outcome));

    assert_eq!(ctl.state(), ViewState::LoggedOut);
    assert!(ctl.session().is_none());
}
