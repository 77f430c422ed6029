use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::directory::UserDirectory;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Mark process start. Later calls keep the first instant.
pub fn record_start_time() {
    STARTED.get_or_init(Instant::now);
}

/// Seconds since [`record_start_time`], zero if it was never called.
pub fn uptime_seconds() -> u64 {
    STARTED
        .get()
        .map_or(0, |started| started.elapsed().as_secs())
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` while the process answers.
    pub status: &'static str,
    /// Accounts in the in-memory directory, seeded plus self-registered.
    pub users: usize,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

impl HealthResponse {
    fn snapshot(directory: &UserDirectory) -> Self {
        Self {
            status: "ok",
            users: directory.len(),
            uptime_seconds: uptime_seconds(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Liveness probe with a directory head count.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(directory): State<UserDirectory>) -> Json<HealthResponse> {
    Json(HealthResponse::snapshot(&directory))
}
