//! Sign-in state machine and the client it talks through.
//!
//! Framework free: the Dioxus app wraps [`SessionController`] in a signal,
//! tests drive it directly with [`mock::MockAuthClient`].

pub mod client;
pub mod controller;
pub mod error;
pub mod mock;

pub use client::{AuthClient, HttpAuthClient};
pub use controller::{AuthRequest, FormMode, PendingAuth, SessionController, ViewState};
pub use error::{AuthError, CONNECTION_FAILED};
