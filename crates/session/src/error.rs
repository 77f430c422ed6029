/// Shown when the server gave no reason, or could not be reached at all.
pub const CONNECTION_FAILED: &str = "Ошибка подключения к серверу";

/// Failure of a sign-in or registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-2xx status.
    #[error("rejected with status {status}: {}", .message.as_deref().unwrap_or("<no reason>"))]
    Rejected { status: u16, message: Option<String> },
    /// The request could not complete: network, DNS, or an unreadable response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl AuthError {
    /// Message for the form. Both kinds collapse to a single line of text.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            AuthError::Rejected { .. } | AuthError::Transport(_) => CONNECTION_FAILED.to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}
