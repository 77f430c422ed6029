use axum::extract::FromRef;
use shared_types::AppConfig;

use crate::directory::UserDirectory;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<UserDirectory>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub directory: UserDirectory,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            directory: UserDirectory::from_seed(&config.users),
        }
    }
}
