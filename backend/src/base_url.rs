//! Backend base-URL validation and endpoint joining.

use std::fmt;

use url::Url;

use crate::SEED_ENDPOINT;

/// Fallback base URL when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Validated backend base URL, stored without a trailing slash.
///
/// Resolved exactly once at startup; every request joins an endpoint path
/// onto this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(String);

#[derive(Debug, thiserror::Error)]
pub enum BackendUrlError {
    #[error("invalid backend URL {value:?}: {source}")]
    Invalid {
        value: String,
        source: url::ParseError,
    },
    #[error("backend URL {0:?} must use http or https")]
    UnsupportedScheme(String),
}

impl BackendUrl {
    pub fn parse(value: &str) -> Result<Self, BackendUrlError> {
        let trimmed = value.trim();
        let parsed = Url::parse(trimmed).map_err(|source| BackendUrlError::Invalid {
            value: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendUrlError::UnsupportedScheme(trimmed.to_string()));
        }
        Ok(Self(trimmed.trim_end_matches('/').to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}{endpoint}` with exactly one `/` between them.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.0)
    }

    /// Link to the seed helper, surfaced when the gallery is empty.
    /// Never invoked programmatically.
    #[must_use]
    pub fn seed_url(&self) -> String {
        self.join(SEED_ENDPOINT)
    }
}

impl Default for BackendUrl {
    fn default() -> Self {
        Self::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid")
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
