//! Scripted [`AuthClient`] for exercising the controller without a server.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use shared_types::{LoginRequest, RegisterRequest, Session};

use crate::client::AuthClient;
use crate::error::AuthError;

/// Replays queued outcomes in order and records how often it was called.
/// When the queue runs dry every further call fails with a transport error.
#[derive(Debug, Default)]
pub struct MockAuthClient {
    outcomes: RefCell<VecDeque<Result<Session, AuthError>>>,
    calls: Cell<usize>,
    last_email: RefCell<Option<String>>,
}

impl MockAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose next call yields `outcome`.
    pub fn responding(outcome: Result<Session, AuthError>) -> Self {
        let mock = Self::new();
        mock.push(outcome);
        mock
    }

    pub fn push(&self, outcome: Result<Session, AuthError>) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Email carried by the most recent request.
    pub fn last_email(&self) -> Option<String> {
        self.last_email.borrow().clone()
    }

    fn next(&self, email: &str) -> Result<Session, AuthError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_email.borrow_mut() = Some(email.to_string());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::Transport("no scripted response".into())))
    }
}

impl AuthClient for MockAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        self.next(&request.email)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError> {
        self.next(&request.email)
    }
}
