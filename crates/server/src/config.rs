use serde::Serialize;
use shared_types::{AppConfig, SeedUser};
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config path, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// `CRM_CONFIG` if set (after loading `.env`), else `config.toml`.
pub fn config_path() -> PathBuf {
    let _ = dotenvy::dotenv();
    std::env::var("CRM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Parse a config file body. Errors fall back to defaults with a warning.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(%e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read the config file once and keep it for the process lifetime.
/// Safe to call multiple times; only the first call reads the file.
///
/// A missing file yields defaults: all features off and no seeded users.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = parse_config(&contents);
                tracing::info!(
                    path = %path.display(),
                    features = ?config.features,
                    users = config.users.len(),
                    "config loaded"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "config not found, using defaults");
                AppConfig::default()
            }
        }
    })
}

#[derive(Serialize)]
struct SeedFile<'a> {
    users: &'a [SeedUser],
}

/// Render `user` as a `[[users]]` table ready to paste into the config file.
pub fn seed_entry(user: &SeedUser) -> Result<String, toml::ser::Error> {
    toml::to_string(&SeedFile {
        users: std::slice::from_ref(user),
    })
}
