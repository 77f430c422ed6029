//! Transport seam between the controller and the authentication endpoint.
//!
//! The trait lets the controller run against a scripted client in tests;
//! [`HttpAuthClient`] is the real implementation.

use serde::Serialize;
use shared_types::{AuthResponse, ClientConfig, ErrorBody, LoginRequest, RegisterRequest, Session};

use crate::error::AuthError;

/// Anything that can turn credentials into a session.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError>;
    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError>;
}

/// JSON-over-HTTP client for the auth service.
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpAuthClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn post_for_session<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Session, AuthError> {
        tracing::debug!(url, "sending auth request");
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            // The body is optional on failure; an unreadable one just means no reason.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|b| b.error);
            tracing::warn!(url, status = status.as_u16(), ?message, "auth request rejected");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: AuthResponse = response.json().await?;
        let session = Session::try_from(body.user)
            .map_err(|e| AuthError::Transport(format!("malformed response: {e}")))?;
        tracing::info!(
            email = session.email(),
            active_role = %session.active_role(),
            "authenticated"
        );
        Ok(session)
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new(ClientConfig::from_build_env())
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        self.post_for_session(&self.config.login_url(), request)
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Session, AuthError> {
        self.post_for_session(&self.config.register_url(), request)
            .await
    }
}
