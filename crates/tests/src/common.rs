use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::{AppConfig, Role, SeedUser};
use std::net::SocketAddr;
use tower::ServiceExt;

pub const DOCTOR_EMAIL: &str = "doctor@clinic.test";
pub const DOCTOR_PASSWORD: &str = "molar-42";
pub const PATIENT_EMAIL: &str = "patient@clinic.test";
pub const PATIENT_PASSWORD: &str = "smile-99";

/// Seed users, hashed once per test binary since argon2 is slow in debug builds.
static SEED: std::sync::LazyLock<Vec<SeedUser>> = std::sync::LazyLock::new(|| {
    vec![
        seed_user(
            DOCTOR_EMAIL,
            "Анна Зубова",
            DOCTOR_PASSWORD,
            vec![Role::Doctor, Role::Admin],
            Some(Role::Doctor),
        ),
        seed_user(
            PATIENT_EMAIL,
            "Пётр Петров",
            PATIENT_PASSWORD,
            vec![Role::Patient],
            None,
        ),
    ]
});

pub fn seed_user(
    email: &str,
    full_name: &str,
    password: &str,
    roles: Vec<Role>,
    active_role: Option<Role>,
) -> SeedUser {
    SeedUser {
        email: email.to_string(),
        full_name: full_name.to_string(),
        password_hash: server::password::hash_password(password).expect("hash seed password"),
        roles,
        active_role,
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        users: SEED.clone(),
        ..AppConfig::default()
    }
}

/// Router over a fresh directory holding the seed users. Rate limiting off.
pub fn test_app() -> Router {
    server::api_router(&test_config())
}

/// Same as [`test_app`] with the limiter on, allowing `max` requests per minute.
pub fn test_app_rate_limited(max: u32, trust_forwarded_for: bool) -> Router {
    let mut config = test_config();
    config.features.rate_limit = true;
    config.server.rate_limit_max = max;
    config.server.rate_limit_window_secs = 60;
    config.server.trust_forwarded_for = trust_forwarded_for;
    server::api_router(&config)
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// POST JSON as if it arrived from `peer`, optionally carrying an `X-Forwarded-For` value.
pub async fn post_json_from(
    app: &Router,
    uri: &str,
    body: &str,
    peer: &str,
    forwarded_for: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(value) = forwarded_for {
        builder = builder.header("x-forwarded-for", value);
    }
    let mut req = builder.body(Body::from(body.to_string())).unwrap();
    let addr: SocketAddr = peer.parse().expect("peer address");
    req.extensions_mut().insert(ConnectInfo(addr));

    send(app, req).await
}

/// Send a bodiless request with an arbitrary method.
pub async fn request(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, req).await;
    (status, body)
}

/// Like [`send`], also returning the response headers.
pub async fn send_raw(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, headers, body)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("test server");
    });
    format!("http://{addr}")
}

pub fn login_body(email: &str, password: &str) -> String {
    serde_json::json!({ "email": email, "password": password }).to_string()
}

pub fn register_body(email: &str, password: &str, full_name: &str) -> String {
    serde_json::json!({ "email": email, "password": password, "fullName": full_name }).to_string()
}
