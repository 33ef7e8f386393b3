//! Color theme and glyphs for the Vitrine TUI.
//!
//! Nord palette by default with an optional high-contrast override.

use ratatui::style::Color;

use vitrine_types::ui::UiOptions;

/// Nord color palette constants.
mod colors {
    use super::Color;

    // === Polar Night (backgrounds) ===
    pub const BG: Color = Color::Rgb(46, 52, 64); // nord0
    pub const BG_PANEL: Color = Color::Rgb(59, 66, 82); // nord1
    pub const BG_HIGHLIGHT: Color = Color::Rgb(67, 76, 94); // nord2
    pub const BORDER: Color = Color::Rgb(76, 86, 106); // nord3

    // === Snow Storm (foregrounds) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(236, 239, 244); // nord6
    pub const TEXT_SECONDARY: Color = Color::Rgb(216, 222, 233); // nord4
    pub const TEXT_MUTED: Color = Color::Rgb(150, 158, 175); // dimmed nord4

    // === Frost (accents) ===
    pub const ACCENT: Color = Color::Rgb(136, 192, 208); // nord8
    pub const PRIMARY: Color = Color::Rgb(129, 161, 193); // nord9
    pub const LINK: Color = Color::Rgb(94, 129, 172); // nord10

    // === Aurora (semantic) ===
    pub const ERROR: Color = Color::Rgb(191, 97, 106); // nord11
    pub const WARNING: Color = Color::Rgb(235, 203, 139); // nord13
    pub const SUCCESS: Color = Color::Rgb(163, 190, 140); // nord14
    pub const TAG: Color = Color::Rgb(180, 142, 173); // nord15
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub link: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub tag: Color,
}

impl Palette {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            bg: colors::BG,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            border: colors::BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            link: colors::LINK,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
            tag: colors::TAG,
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            accent: Color::Cyan,
            link: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            tag: Color::Magenta,
        }
    }
}

/// Glyph set, with ASCII fallbacks for constrained terminals.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub bullet: &'static str,
    pub ellipsis: &'static str,
    pub cursor: &'static str,
    pub spinner: &'static [&'static str],
}

impl Glyphs {
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            selected: "▸",
            unselected: " ",
            bullet: "·",
            ellipsis: "…",
            cursor: "▏",
            spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        }
    }

    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            selected: ">",
            unselected: " ",
            bullet: "-",
            ellipsis: "...",
            cursor: "|",
            spinner: &["|", "/", "-", "\\"],
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}

/// Spinner frame for the given elapsed time. Static under reduced motion.
#[must_use]
pub fn spinner_frame(glyphs: &Glyphs, options: UiOptions, elapsed_ms: u128) -> &'static str {
    if options.reduced_motion || glyphs.spinner.is_empty() {
        return glyphs.spinner.first().copied().unwrap_or("-");
    }
    let index = (elapsed_ms / 80) as usize % glyphs.spinner.len();
    glyphs.spinner[index]
}
