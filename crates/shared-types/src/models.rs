use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Credentials being typed into the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Both fields hold something. Whitespace counts; the server trims.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

impl LoginRequest {
    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

/// Register request body. New accounts always start as patients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Пароль должен содержать минимум 6 символов"))
    )]
    pub password: String,
    #[serde(default)]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub full_name: String,
}

impl RegisterRequest {
    pub fn trimmed(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
        }
    }

    pub fn has_empty_field(&self) -> bool {
        self.email.is_empty() || self.password.is_empty() || self.full_name.is_empty()
    }
}

/// Authenticated user as sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    pub full_name: String,
    pub roles: Vec<Role>,
    pub active_role: Role,
}

/// Successful login/register response: `{"user": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthResponse {
    pub user: AuthUser,
}

/// Failure response body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorBody {
    pub error: String,
}

/// Why a wire user could not become a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoRoles,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoRoles => write!(f, "user has no roles"),
        }
    }
}

impl std::error::Error for SessionError {}

/// An authenticated session.
///
/// `roles` is non-empty and duplicate-free, and `active_role` is always one of them.
/// Fields are private so the invariant can only be changed through [`Session::switch_role`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    email: String,
    full_name: String,
    roles: Vec<Role>,
    active_role: Role,
}

impl Session {
    /// Build a session. An `active_role` outside `roles` falls back to the first role.
    pub fn new(
        email: impl Into<String>,
        full_name: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
        active_role: Role,
    ) -> Result<Self, SessionError> {
        let mut unique: Vec<Role> = Vec::new();
        for role in roles {
            if !unique.contains(&role) {
                unique.push(role);
            }
        }
        let first = *unique.first().ok_or(SessionError::NoRoles)?;
        let active_role = if unique.contains(&active_role) {
            active_role
        } else {
            first
        };

        Ok(Self {
            email: email.into(),
            full_name: full_name.into(),
            roles: unique,
            active_role,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Make `role` active. Returns `false` (and changes nothing) if the session lacks it.
    pub fn switch_role(&mut self, role: Role) -> bool {
        if !self.has_role(role) {
            return false;
        }
        self.active_role = role;
        true
    }
}

impl TryFrom<AuthUser> for Session {
    type Error = SessionError;

    fn try_from(user: AuthUser) -> Result<Self, Self::Error> {
        Session::new(user.email, user.full_name, user.roles, user.active_role)
    }
}

impl From<&Session> for AuthUser {
    fn from(s: &Session) -> Self {
        AuthUser {
            email: s.email.clone(),
            full_name: s.full_name.clone(),
            roles: s.roles.clone(),
            active_role: s.active_role,
        }
    }
}
