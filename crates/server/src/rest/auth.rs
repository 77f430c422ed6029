use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use shared_types::{AppError, AuthResponse, AuthUser, ErrorBody, LoginRequest, RegisterRequest};

use crate::directory::UserDirectory;

pub const MALFORMED_BODY: &str = "Некорректный запрос";

/// Unwrap a JSON body, turning extractor rejections into the `{error}` contract.
fn read_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(v)| v).map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable request body");
        AppError::bad_request(MALFORMED_BODY)
    })
}

/// Run a directory call off the async workers; argon2 is deliberately slow.
async fn blocking<F>(f: F) -> Result<AuthUser, AppError>
where
    F: FnOnce() -> Result<AuthUser, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        tracing::error!(%e, "directory task failed");
        AppError::internal("Внутренняя ошибка сервера")
    })?
}

// ---------------------------------------------------------------------------
// POST /api/auth/login
// ---------------------------------------------------------------------------

/// Check credentials and return the user with their roles.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 400, description = "Email or password missing", body = ErrorBody),
        (status = 401, description = "Unknown email or wrong password", body = ErrorBody),
        (status = 429, description = "Too many attempts", body = ErrorBody)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn login(
    State(directory): State<UserDirectory>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let request = read_json(payload)?;
    let user = blocking(move || directory.authenticate(&request))
        .await
        .inspect_err(|e| tracing::info!(kind = %e.kind, "login rejected"))?;

    tracing::info!(email = %user.email, roles = ?user.roles, "login succeeded");
    Ok(Json(AuthResponse { user }))
}

// ---------------------------------------------------------------------------
// POST /api/auth/register
// ---------------------------------------------------------------------------

/// Create a patient account and sign it in.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing field or short password", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 429, description = "Too many attempts", body = ErrorBody)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip_all)]
pub async fn register(
    State(directory): State<UserDirectory>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let request = read_json(payload)?;
    let user = blocking(move || directory.register(&request))
        .await
        .inspect_err(|e| tracing::info!(kind = %e.kind, "registration rejected"))?;

    tracing::info!(email = %user.email, "patient registered");
    Ok(Json(AuthResponse { user }))
}

/// Bare `OPTIONS` without CORS preflight headers. Real preflights are answered by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
