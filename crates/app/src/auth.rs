use dioxus::prelude::*;
use session::{FormMode, HttpAuthClient, SessionController, ViewState};
use shared_types::Role;

/// Page-wide sign-in state. One controller per mounted page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub controller: Signal<SessionController>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            controller: Signal::new(SessionController::new()),
        }
    }

    pub fn view(&self) -> ViewState {
        self.controller.read().state()
    }

    pub fn pick_role(&mut self, role: Role) {
        self.controller.write().pick_role(role);
    }

    pub fn back_to_roles(&mut self) {
        self.controller.write().clear_picked_role();
    }

    pub fn set_mode(&mut self, mode: FormMode) {
        self.controller.write().set_mode(mode);
    }

    pub fn switch_role(&mut self, role: Role) {
        self.controller.write().switch_role(role);
    }

    pub fn logout(&mut self) {
        self.controller.write().logout();
    }

    /// Run one submit through `client`. The signal is only borrowed around the
    /// two state changes, never across the request.
    pub async fn submit(&mut self, client: &HttpAuthClient) {
        let Some(pending) = self.controller.write().begin_submit() else {
            return;
        };
        let outcome = pending.send(client).await;
        self.controller
            .write()
            .finish_submit(pending.ticket(), outcome);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the HTTP client provided at the app root.
pub fn use_auth_client() -> HttpAuthClient {
    use_context::<HttpAuthClient>()
}
