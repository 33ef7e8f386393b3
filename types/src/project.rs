use serde::Deserialize;

/// Number of tags shown on a project card.
///
/// Truncation is a display rule only; the full tag sequence stays in the
/// model.
pub const VISIBLE_TAG_COUNT: usize = 3;

/// A displayable work-sample entry fetched from the backend.
///
/// Read-only for the lifetime of a run: created by the backend, fetched once
/// at startup, discarded on exit. Unknown fields in the feed payload are
/// ignored; everything except the identifier and title is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Backend identifier, used only as a render key.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl Project {
    /// Tags shown on the card: the first [`VISIBLE_TAG_COUNT`] entries.
    #[must_use]
    pub fn visible_tags(&self) -> &[String] {
        let end = self.tags.len().min(VISIBLE_TAG_COUNT);
        &self.tags[..end]
    }
}
