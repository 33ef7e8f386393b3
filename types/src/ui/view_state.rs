//! View state for rendering.
//!
//! Groups the state the renderer reads each frame, separate from the feed
//! and contact state machines that drive it.

use std::time::Instant;

/// Which page section has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionFocus {
    #[default]
    Profile,
    Projects,
    Contact,
}

impl SectionFocus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            SectionFocus::Profile => SectionFocus::Projects,
            SectionFocus::Projects => SectionFocus::Contact,
            SectionFocus::Contact => SectionFocus::Profile,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SectionFocus::Profile => "Profile",
            SectionFocus::Projects => "Projects",
            SectionFocus::Contact => "Contact",
        }
    }
}

/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// Transient one-line status-bar message (e.g. "link copied").
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub since: Instant,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            since: Instant::now(),
        }
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub focus: SectionFocus,
    /// Selected card in the gallery (index into the feed).
    pub selected_project: usize,
    pub notice: Option<Notice>,
    pub ui_options: UiOptions,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            focus: SectionFocus::default(),
            selected_project: 0,
            notice: None,
            ui_options: UiOptions::default(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
