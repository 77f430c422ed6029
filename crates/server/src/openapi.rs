use axum::{http::header, http::Method, routing::get, Router};
use shared_types::{AppConfig, AuthResponse, AuthUser, ErrorBody, LoginRequest, RegisterRequest, Role};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health::{self, HealthResponse};
use crate::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::rest;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DentalCRM auth",
        description = "Sign-in and registration for the DentalCRM front end."
    ),
    paths(rest::auth::login, rest::auth::register, health::health_check),
    components(schemas(
        LoginRequest,
        RegisterRequest,
        AuthResponse,
        AuthUser,
        ErrorBody,
        Role,
        HealthResponse
    )),
    tags(
        (name = "auth", description = "Sign-in and registration"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// CORS policy the browser client relies on: any origin, POST and preflight only.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(86_400))
}

/// Build the service router with a directory seeded from `config`.
pub fn api_router(config: &AppConfig) -> Router {
    let state = AppState::from_config(config);
    let mut auth = rest::auth_router();

    if config.features.rate_limit {
        let limiter = RateLimitState::new(
            config.server.rate_limit_max,
            Duration::from_secs(config.server.rate_limit_window_secs),
        )
        .trust_forwarded_for(config.server.trust_forwarded_for);
        auth = auth.route_layer(axum::middleware::from_fn_with_state(
            limiter,
            rate_limit_middleware,
        ));
    }

    let mut router = Router::new()
        .merge(auth)
        .route("/health", get(health::health_check))
        .with_state(state);

    if config.features.docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router.layer(cors_layer()).layer(TraceLayer::new_for_http())
}
