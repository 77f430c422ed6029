//! Authentication service for the DentalCRM front end.
//!
//! Serves `POST /api/auth/login` and `POST /api/auth/register` over an
//! in-memory user directory. The app binary merges [`openapi::api_router`]
//! into its Dioxus server; integration tests drive the same router directly.

pub mod config;
pub mod directory;
pub mod health;
pub mod openapi;
pub mod password;
pub mod rate_limit;
pub mod rest;
pub mod state;

pub use openapi::api_router;
pub use state::AppState;
