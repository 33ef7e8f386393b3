//! Application state and orchestration for Vitrine.
//!
//! # Architecture
//!
//! [`App`] owns three independent components plus the view state the
//! renderer reads:
//!
//! - [`FeedState`] - the project gallery's `loading -> {ready, failed}`
//!   machine, fed by one fetch task spawned at startup
//! - [`ContactState`] - the contact form and its
//!   `idle -> sending -> {sent, failed}` machine, fed by one task per
//!   submission attempt
//! - [`VitrineConfig`] resolution - backend base URL, profile content, and
//!   UI options, resolved once before the loop starts
//!
//! The frame loop contract is: handle input, [`App::process_events`],
//! [`App::tick`], render. Fetch tasks report through bounded channels that
//! `process_events` drains; the two components touch disjoint state and may
//! overlap freely.

mod config;
mod contact;
mod feed;

use std::time::Duration;

pub use config::{
    AppConfig, BACKEND_URL_ENV, BackendConfig, ConfigError, VitrineConfig, config_path,
    resolve_backend_url,
};
pub use contact::{ContactState, SubmitEvent};
pub use feed::{FeedEvent, FeedState};

pub use vitrine_backend::BackendUrl;
pub use vitrine_types::{
    ContactField, ContactPayload, FeedPhase, MissingField, Profile, Project, SubmitStatus,
};

use vitrine_types::ui::{Notice, SectionFocus, UiOptions, ViewState};

/// How long a status-bar notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(4);

pub struct App {
    profile: Profile,
    backend: BackendUrl,
    pub feed: FeedState,
    pub contact: ContactState,
    pub view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&VitrineConfig>) -> Self {
        let backend = config::resolve_backend_url(config);
        let profile = config.map(VitrineConfig::profile).unwrap_or_default();
        let ui_options = config.map(VitrineConfig::ui_options).unwrap_or_default();

        tracing::info!(backend = %backend, "App initialized");

        let mut view = ViewState::new();
        view.ui_options = ui_options;

        Self {
            profile,
            backend,
            feed: FeedState::new(),
            contact: ContactState::new(),
            view,
            should_quit: false,
        }
    }

    /// Kick off the one feed fetch for this run. Requires a tokio runtime.
    pub fn start(&mut self) {
        self.feed.spawn_fetch(self.backend.clone());
    }

    /// Drain completion events from the fetch tasks. Called once per frame.
    pub fn process_events(&mut self) {
        self.feed.poll();
        self.contact.poll();
        self.clamp_selection();
    }

    /// Per-frame housekeeping: notice expiry.
    pub fn tick(&mut self) {
        if let Some(notice) = &self.view.notice
            && notice.since.elapsed() >= NOTICE_TTL
        {
            self.view.notice = None;
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn backend(&self) -> &BackendUrl {
        &self.backend
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next_section(&mut self) {
        self.view.focus = self.view.focus.next();
    }

    pub fn focus_section(&mut self, focus: SectionFocus) {
        self.view.focus = focus;
    }

    pub fn select_next_project(&mut self) {
        let count = self.feed.phase.projects().len();
        if count > 0 && self.view.selected_project + 1 < count {
            self.view.selected_project += 1;
        }
    }

    pub fn select_prev_project(&mut self) {
        self.view.selected_project = self.view.selected_project.saturating_sub(1);
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.feed.phase.projects().get(self.view.selected_project)
    }

    /// Demo link of the selected project, if any.
    #[must_use]
    pub fn selected_demo_url(&self) -> Option<&str> {
        self.selected_project()?.demo_url.as_deref()
    }

    /// Repo link of the selected project, if any.
    #[must_use]
    pub fn selected_repo_url(&self) -> Option<&str> {
        self.selected_project()?.repo_url.as_deref()
    }

    /// Seed helper link, surfaced when the gallery is empty.
    #[must_use]
    pub fn seed_url(&self) -> String {
        self.backend.seed_url()
    }

    /// Submit the contact form; a refused submission surfaces the missing
    /// field as a notice.
    pub fn submit_contact(&mut self) {
        match self.contact.submit(&self.backend) {
            Ok(()) => {}
            Err(missing) => self.push_notice(missing.to_string()),
        }
    }

    pub fn push_notice(&mut self, text: impl Into<String>) {
        self.view.notice = Some(Notice::new(text));
    }

    fn clamp_selection(&mut self) {
        let count = self.feed.phase.projects().len();
        if count == 0 {
            self.view.selected_project = 0;
        } else if self.view.selected_project >= count {
            self.view.selected_project = count - 1;
        }
    }
}
