use serde::Deserialize;

/// Hero-section content: who the portfolio belongs to.
///
/// Every field can be set under `[profile]` in the config file; the defaults
/// are placeholders meant to be overridden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    /// Skill tags rendered under the headline.
    pub skills: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "I build fast, clean, easy-to-use software. \
                       This page shows a selection of my work."
                .to_string(),
            email: Some("you@example.com".to_string()),
            website: Some("https://yourdomain.com".to_string()),
            github: Some("https://github.com".to_string()),
            linkedin: Some("https://linkedin.com".to_string()),
            instagram: Some("https://instagram.com".to_string()),
            skills: ["Rust", "Tokio", "Ratatui", "FastAPI", "MongoDB"]
                .map(str::to_string)
                .to_vec(),
        }
    }
}

impl Profile {
    /// Contact links in display order, with labels.
    #[must_use]
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(email) = self.email.as_deref() {
            links.push(("Email", email));
        }
        if let Some(github) = self.github.as_deref() {
            links.push(("GitHub", github));
        }
        if let Some(linkedin) = self.linkedin.as_deref() {
            links.push(("LinkedIn", linkedin));
        }
        if let Some(instagram) = self.instagram.as_deref() {
            links.push(("Instagram", instagram));
        }
        if let Some(website) = self.website.as_deref() {
            links.push(("Website", website));
        }
        links
    }
}
