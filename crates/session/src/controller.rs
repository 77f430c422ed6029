//! View state for the sign-in page.
//!
//! The controller owns everything the page mutates: the typed credentials, the
//! in-flight flag, the last error and the session. A submit is split into
//! [`SessionController::begin_submit`] and [`SessionController::finish_submit`]
//! so a UI can release its borrow while the request is awaited.

use shared_types::{Credentials, RegisterRequest, Role, Session};

use crate::client::AuthClient;
use crate::error::AuthError;

/// Which top-level view the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    LoggedOut,
    Authenticating,
    LoggedIn,
}

/// Which form the sign-in card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    SignIn,
    Register,
}

/// The request a submit produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Login(shared_types::LoginRequest),
    Register(RegisterRequest),
}

/// An accepted submit waiting for its response.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAuth {
    ticket: u64,
    request: AuthRequest,
}

impl PendingAuth {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn request(&self) -> &AuthRequest {
        &self.request
    }

    /// Issue the request through `client`.
    pub async fn send<C: AuthClient>(&self, client: &C) -> Result<Session, AuthError> {
        match &self.request {
            AuthRequest::Login(req) => client.login(req).await,
            AuthRequest::Register(req) => client.register(req).await,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionController {
    credentials: Credentials,
    full_name: String,
    mode: FormMode,
    picked_role: Option<Role>,
    is_authenticating: bool,
    last_error: Option<String>,
    session: Option<Session>,
    /// Bumped on every submit and logout; responses carrying an older ticket are dropped.
    generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        if self.session.is_some() {
            ViewState::LoggedIn
        } else if self.is_authenticating {
            ViewState::Authenticating
        } else {
            ViewState::LoggedOut
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn picked_role(&self) -> Option<Role> {
        self.picked_role
    }

    pub fn is_authenticating(&self) -> bool {
        self.is_authenticating
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn active_role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::active_role)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.credentials.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    /// Switch between sign-in and registration. A stale error from the other form is dropped.
    pub fn set_mode(&mut self, mode: FormMode) {
        if self.mode != mode {
            self.mode = mode;
            self.last_error = None;
        }
    }

    /// Remember the tile picked on the role grid. Display only: the server decides the roles.
    pub fn pick_role(&mut self, role: Role) {
        self.picked_role = Some(role);
    }

    /// Back to the role grid. The next card opens on the sign-in form with no error;
    /// typed credentials are kept.
    pub fn clear_picked_role(&mut self) {
        self.picked_role = None;
        self.mode = FormMode::SignIn;
        self.last_error = None;
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        if self.is_authenticating || self.session.is_some() || !self.credentials.is_complete() {
            return false;
        }
        match self.mode {
            FormMode::SignIn => true,
            FormMode::Register => !self.full_name.is_empty(),
        }
    }

    /// Enter `Authenticating` and hand back the request to send, or `None` if submit
    /// is currently disabled.
    pub fn begin_submit(&mut self) -> Option<PendingAuth> {
        if !self.can_submit() {
            return None;
        }
        self.generation += 1;
        self.is_authenticating = true;
        self.last_error = None;

        let request = match self.mode {
            FormMode::SignIn => AuthRequest::Login(self.credentials.to_request()),
            FormMode::Register => AuthRequest::Register(RegisterRequest {
                email: self.credentials.email.clone(),
                password: self.credentials.password.clone(),
                full_name: self.full_name.clone(),
            }),
        };
        tracing::debug!(ticket = self.generation, mode = ?self.mode, "submit accepted");

        Some(PendingAuth {
            ticket: self.generation,
            request,
        })
    }

    /// Apply the outcome of a request started by `begin_submit`.
    ///
    /// Returns `false` if the outcome was ignored because the ticket is stale
    /// (a logout happened in between) or no request was in flight.
    pub fn finish_submit(&mut self, ticket: u64, outcome: Result<Session, AuthError>) -> bool {
        if !self.is_authenticating || ticket != self.generation {
            tracing::debug!(ticket, current = self.generation, "dropping stale auth outcome");
            return false;
        }
        self.is_authenticating = false;

        match outcome {
            Ok(session) => {
                tracing::info!(active_role = %session.active_role(), "signed in");
                self.session = Some(session);
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in failed");
                self.last_error = Some(err.user_message());
            }
        }
        true
    }

    /// Submit and await the response in one step. Returns whether the page is now signed in.
    pub async fn submit<C: AuthClient>(&mut self, client: &C) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = pending.send(client).await;
        self.finish_submit(pending.ticket(), outcome);
        self.session.is_some()
    }

    /// Make `role` active. Silently ignored when signed out or when the session lacks `role`.
    pub fn switch_role(&mut self, role: Role) -> bool {
        self.session
            .as_mut()
            .map(|s| s.switch_role(role))
            .unwrap_or(false)
    }

    /// Back to the initial signed-out page, whatever the current state.
    pub fn logout(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
        tracing::info!("signed out");
    }
}
