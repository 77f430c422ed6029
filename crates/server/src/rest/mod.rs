pub mod auth;

use axum::{routing::post, Router};

use crate::state::AppState;

/// Auth routes. Any method other than POST/OPTIONS answers 405 with the `{error}` body.
pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/auth/login",
            post(auth::login)
                .options(auth::preflight)
                .fallback(auth::method_not_allowed),
        )
        .route(
            "/api/auth/register",
            post(auth::register)
                .options(auth::preflight)
                .fallback(auth::method_not_allowed),
        )
}
