//! HTTP client for the portfolio backend.
//!
//! # Architecture
//!
//! Two operations, both single best-effort attempts — no retry, no request
//! timeout, no cancellation:
//!
//! - [`fetch_projects`] - GET `{base}/api/projects`, returning the project
//!   feed in backend order
//! - [`submit_contact`] - POST `{base}/api/contact` with the JSON-encoded
//!   form payload
//!
//! Callers decide what a failure means for the UI; this crate only types the
//! failure. [`FeedError`] collapses to "feed unavailable" (empty gallery plus
//! a message) and [`SubmitError`] to "submission failed" (message plus
//! resubmission) at the presentation layer.
//!
//! # Response shapes
//!
//! The projects endpoint answers `{ "items": [...] }`; a missing `items`
//! field is treated as an empty feed, any non-2xx status or non-JSON body as
//! failure. The contact endpoint answers `{ "ok": bool }`; the body is
//! parsed regardless of status and anything but a truthy `ok` is a
//! rejection.

mod base_url;

use std::sync::OnceLock;

use serde::Deserialize;

use vitrine_types::{ContactPayload, Project};

pub use base_url::{BackendUrl, BackendUrlError, DEFAULT_BACKEND_URL};

pub const PROJECTS_ENDPOINT: &str = "/api/projects";
pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const SEED_ENDPOINT: &str = "/api/seed";

/// Shared HTTP client, built once.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .build()
            .expect("HTTP client must build; cannot reach the backend without it")
    })
}

/// The feed could not be loaded. Recovered locally by rendering an empty
/// gallery plus a static message.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("projects request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("projects endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("projects response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The contact submission did not go through. Recovered locally by rendering
/// a static message and allowing resubmission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("contact request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("contact response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("backend rejected the message")]
    Rejected,
}

#[derive(Debug, Default, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    items: Vec<Project>,
}

#[derive(Debug, Default, Deserialize)]
struct ContactResponse {
    #[serde(default)]
    ok: bool,
}

/// Fetch the project feed. One attempt per run.
pub async fn fetch_projects(base: &BackendUrl) -> Result<Vec<Project>, FeedError> {
    let url = base.join(PROJECTS_ENDPOINT);
    tracing::debug!(%url, "Fetching project feed");

    let response = http_client().get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status));
    }

    let body: FeedResponse = response.json().await.map_err(FeedError::Decode)?;
    tracing::info!(count = body.items.len(), "Project feed loaded");
    Ok(body.items)
}

/// Post a contact payload. One attempt per submission.
pub async fn submit_contact(
    base: &BackendUrl,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    let url = base.join(CONTACT_ENDPOINT);
    tracing::debug!(%url, "Submitting contact form");

    let response = http_client().post(&url).json(payload).send().await?;
    let body: ContactResponse = response.json().await.map_err(SubmitError::Decode)?;
    if body.ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected)
    }
}
