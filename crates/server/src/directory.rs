//! In-memory user directory backing the auth routes.
//!
//! Seeded from `[[users]]` in `config.toml`; registrations live until the
//! process exits.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use shared_types::{AppError, AuthUser, LoginRequest, RegisterRequest, Role, SeedUser};
use validator::Validate;

use crate::password::{hash_password, verify_password};

pub const CREDENTIALS_REQUIRED: &str = "Email и пароль обязательны";
pub const INVALID_CREDENTIALS: &str = "Неверный email или пароль";
pub const REGISTRATION_FIELDS_REQUIRED: &str = "Email, пароль и ФИО обязательны";
pub const PASSWORD_TOO_SHORT: &str = "Пароль должен содержать минимум 6 символов";
pub const EMAIL_TAKEN: &str = "Пользователь с таким email уже существует";

#[derive(Debug, Clone)]
struct UserRecord {
    email: String,
    full_name: String,
    password_hash: String,
    roles: Vec<Role>,
    active_role: Option<Role>,
}

impl UserRecord {
    /// Wire form. A missing or foreign active role resolves to the first role,
    /// and a user without roles is reported as a patient.
    fn to_auth_user(&self) -> AuthUser {
        let roles = if self.roles.is_empty() {
            vec![Role::Patient]
        } else {
            self.roles.clone()
        };
        let active_role = self
            .active_role
            .filter(|r| roles.contains(r))
            .unwrap_or(roles[0]);

        AuthUser {
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            roles,
            active_role,
        }
    }
}

impl From<&SeedUser> for UserRecord {
    fn from(seed: &SeedUser) -> Self {
        Self {
            email: seed.email.trim().to_string(),
            full_name: seed.full_name.clone(),
            password_hash: seed.password_hash.clone(),
            roles: seed.roles.clone(),
            active_role: seed.active_role,
        }
    }
}

fn key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Shared handle; clones see the same users.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: &[SeedUser]) -> Self {
        let users = seed
            .iter()
            .map(|s| (key(&s.email), UserRecord::from(s)))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub fn len(&self) -> usize {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check credentials and return the user's roles.
    pub fn authenticate(&self, request: &LoginRequest) -> Result<AuthUser, AppError> {
        let request = request.trimmed();
        if request.validate().is_err() {
            return Err(AppError::bad_request(CREDENTIALS_REQUIRED));
        }

        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        let record = users
            .get(&key(&request.email))
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        if !verify_password(&request.password, &record.password_hash) {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
        Ok(record.to_auth_user())
    }

    /// Create a patient account.
    pub fn register(&self, request: &RegisterRequest) -> Result<AuthUser, AppError> {
        let request = request.trimmed();
        if request.has_empty_field() {
            return Err(AppError::bad_request(REGISTRATION_FIELDS_REQUIRED));
        }
        if let Err(errors) = request.validate() {
            let err = AppError::from(errors);
            let message = err
                .field_errors
                .get("password")
                .cloned()
                .unwrap_or_else(|| PASSWORD_TOO_SHORT.to_string());
            return Err(AppError {
                message,
                ..err
            });
        }

        let k = key(&request.email);
        if self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&k)
        {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        // Hash outside the write lock; the entry check below settles races.
        let password_hash = hash_password(&request.password)?;
        let record = UserRecord {
            email: request.email,
            full_name: request.full_name,
            password_hash,
            roles: vec![Role::Patient],
            active_role: Some(Role::Patient),
        };

        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        match users.entry(k) {
            std::collections::hash_map::Entry::Occupied(_) => Err(AppError::conflict(EMAIL_TAKEN)),
            std::collections::hash_map::Entry::Vacant(slot) => {
                let user = record.to_auth_user();
                slot.insert(record);
                Ok(user)
            }
        }
    }
}
