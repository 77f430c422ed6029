use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Feature flags controlling optional parts of the auth service.
///
/// Loaded from `config.toml` at server startup. Every field defaults to `false`
/// so a missing or incomplete config file leaves the service at its minimum.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Throttle the auth routes per client address.
    #[serde(default)]
    pub rate_limit: bool,
    /// Serve the interactive API reference at `/docs`.
    #[serde(default)]
    pub docs: bool,
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Requests allowed per client within `rate_limit_window_secs`.
    #[serde(default = "default_rate_limit_max")]
    pub rate_limit_max: u32,
    #[serde(default = "default_rate_limit_window")]
    pub rate_limit_window_secs: u64,
    /// Key the limiter on the first `X-Forwarded-For` hop instead of the peer address.
    /// Only safe behind a proxy that overwrites the header.
    #[serde(default)]
    pub trust_forwarded_for: bool,
}

fn default_rate_limit_max() -> u32 {
    20
}

fn default_rate_limit_window() -> u64 {
    60
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rate_limit_max: default_rate_limit_max(),
            rate_limit_window_secs: default_rate_limit_window(),
            trust_forwarded_for: false,
        }
    }
}

/// A `[[users]]` entry used to seed the in-memory directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedUser {
    pub email: String,
    pub full_name: String,
    /// Argon2 PHC string, see the `hash-password` binary.
    pub password_hash: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub active_role: Option<Role>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

/// Where the browser/desktop client sends auth requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    pub const DEFAULT_API_BASE: &'static str = "http://127.0.0.1:8080";

    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base from the `CRM_API_BASE` variable at build time, else the local default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CRM_API_BASE").unwrap_or(Self::DEFAULT_API_BASE))
    }

    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.api_base)
    }

    pub fn register_url(&self) -> String {
        format!("{}/api/auth/register", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_BASE)
    }
}
