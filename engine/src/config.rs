//! Configuration loading and backend base-URL resolution.
//!
//! The config file lives at `~/.vitrine/config.toml` and is entirely
//! optional:
//!
//! ```toml
//! [backend]
//! url = "https://portfolio.example.com"
//!
//! [profile]
//! name = "Ada Lovelace"
//! headline = "Engines, analytical and otherwise."
//! skills = ["Rust", "Mathematics"]
//!
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! ```
//!
//! The backend base URL resolves once at startup: config file value, then
//! the `VITRINE_BACKEND_URL` environment variable, then
//! `http://localhost:8000`. An invalid candidate is logged and skipped.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use vitrine_backend::BackendUrl;
use vitrine_types::Profile;
use vitrine_types::ui::UiOptions;

/// Environment fallback for the backend base URL.
pub const BACKEND_URL_ENV: &str = "VITRINE_BACKEND_URL";

#[derive(Debug, Default, Deserialize)]
pub struct VitrineConfig {
    pub app: Option<AppConfig>,
    pub backend: Option<BackendConfig>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for bullets and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the loading spinner and other motion.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct BackendConfig {
    pub url: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl VitrineConfig {
    /// Load from the default location. A missing file is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
            reduced_motion: app.is_some_and(|a| a.reduced_motion),
        }
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }

    fn backend_url_value(&self) -> Option<&str> {
        self.backend.as_ref().and_then(|b| b.url.as_deref())
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vitrine").join("config.toml"))
}

/// Resolve the backend base URL from config, environment, and default.
#[must_use]
pub fn resolve_backend_url(config: Option<&VitrineConfig>) -> BackendUrl {
    let env_value = env::var(BACKEND_URL_ENV).ok();
    resolve_from(
        config.and_then(VitrineConfig::backend_url_value),
        env_value.as_deref(),
    )
}

fn resolve_from(file_value: Option<&str>, env_value: Option<&str>) -> BackendUrl {
    for (origin, value) in [("config", file_value), ("environment", env_value)] {
        let Some(value) = value else { continue };
        match BackendUrl::parse(value) {
            Ok(base) => {
                tracing::info!(origin, base = %base, "Backend URL resolved");
                return base;
            }
            Err(err) => {
                tracing::warn!(%err, origin, "Ignoring invalid backend URL");
            }
        }
    }
    BackendUrl::default()
}
