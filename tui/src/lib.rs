//! TUI rendering for Vitrine using ratatui.
//!
//! One full-screen page, stacked top to bottom: hero/profile, project
//! gallery, contact form, status bar. Rendering is a pure function of
//! [`App`] state; input handling lives in [`handle_events`].

mod contact;
mod gallery;
mod hero;
mod input;
mod theme;

pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use vitrine_engine::App;
use vitrine_types::ui::SectionFocus;

const HERO_HEIGHT: u16 = 8;
const CONTACT_HEIGHT: u16 = 7;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let background = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(CONTACT_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    hero::draw(frame, app, chunks[0], &palette, &glyphs);
    gallery::draw(frame, app, chunks[1], &palette, &glyphs);
    contact::draw(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

/// Bordered section container; the focused section gets the accent border.
pub(crate) fn section_block<'a>(title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let (border_style, title_style) = if focused {
        (
            Style::default().fg(palette.accent),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(palette.border),
            Style::default().fg(palette.text_muted),
        )
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {title} "), title_style))
}

/// Truncate to a display width, appending an ellipsis when cut.
pub(crate) fn fit_width(text: &str, max_width: usize, glyphs: &Glyphs) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(UnicodeWidthStr::width(glyphs.ellipsis));
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(glyphs.ellipsis);
    out
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = match app.view.focus {
        SectionFocus::Profile => "Tab section  q quit",
        SectionFocus::Projects => "Up/Down select  d/r/s copy link  Tab section  q quit",
        SectionFocus::Contact => "Tab/Enter field  Ctrl+S send  Esc back  Ctrl+C quit",
    };

    let (left_text, left_style) = match app.view.notice.as_ref() {
        Some(notice) => (notice.text.clone(), Style::default().fg(palette.warning)),
        None => (hints.to_string(), Style::default().fg(palette.text_muted)),
    };

    let profile = app.profile();
    let year = chrono::Local::now().year();
    let mut footer = format!("© {year} {}", profile.name);
    if let Some(website) = profile.website.as_deref() {
        footer.push_str(&format!(" {} {website}", glyphs.bullet));
    }

    let width = area.width as usize;
    let left_width = UnicodeWidthStr::width(left_text.as_str());
    let footer_width = UnicodeWidthStr::width(footer.as_str());
    let padding = width.saturating_sub(left_width + footer_width).max(1);

    let line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(footer, Style::default().fg(palette.text_muted)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(palette.bg_panel)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use vitrine_engine::{App, VitrineConfig};
    use vitrine_types::ui::SectionFocus;
    use vitrine_types::{FeedPhase, Profile, Project, SubmitStatus};

    use super::draw;
    use crate::contact::{FAILED_MESSAGE, SENDING_MESSAGE, SENT_MESSAGE};
    use crate::gallery::{FEED_EMPTY_MESSAGE, FEED_UNAVAILABLE_MESSAGE, LOADING_MESSAGE};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()));
            }
            text.push('\n');
        }
        text
    }

    fn project(id: &str, title: &str) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: Some(format!("{title} subtitle")),
            description: format!("{title} description"),
            tags: vec!["t1".to_string(), "t2".to_string()],
            image_url: None,
            demo_url: Some(format!("https://example.com/{id}")),
            repo_url: None,
        }
    }

    #[test]
    fn renders_cards_in_feed_order() {
        let mut app = App::new(None);
        app.feed.phase = FeedPhase::Ready(vec![
            project("1", "Alpha"),
            project("2", "Beta"),
            project("3", "Gamma"),
        ]);
        let screen = render(&app);

        let alpha = screen.find("Alpha").unwrap();
        let beta = screen.find("Beta").unwrap();
        let gamma = screen.find("Gamma").unwrap();
        assert!(alpha < beta && beta < gamma, "cards out of feed order");
        assert!(screen.contains("Projects (3)"));
    }

    #[test]
    fn empty_feed_shows_empty_state_with_seed_link() {
        let mut app = App::new(None);
        app.feed.phase = FeedPhase::Ready(Vec::new());
        let screen = render(&app);
        assert!(screen.contains(FEED_EMPTY_MESSAGE));
        assert!(screen.contains("http://localhost:8000/api/seed"));
    }

    #[test]
    fn failed_feed_shows_fallback_and_no_cards() {
        let mut app = App::new(None);
        app.feed.phase = FeedPhase::Ready(vec![project("1", "Sentinel")]);
        assert!(render(&app).contains("Sentinel"));

        let mut app = App::new(None);
        app.feed.phase = FeedPhase::Failed;
        let screen = render(&app);
        assert!(screen.contains(FEED_UNAVAILABLE_MESSAGE));
        assert!(!screen.contains("Sentinel"));
    }

    #[test]
    fn loading_feed_shows_loading_line() {
        let app = App::new(None);
        assert!(render(&app).contains(LOADING_MESSAGE));
    }

    #[test]
    fn tag_display_truncates_to_three() {
        let mut many_tags = project("1", "Tagged");
        many_tags.tags = ["t1", "t2", "t3", "t4", "t5"].map(str::to_string).to_vec();
        let mut app = App::new(None);
        app.feed.phase = FeedPhase::Ready(vec![many_tags]);
        let screen = render(&app);
        assert!(screen.contains("[t3]"));
        assert!(!screen.contains("[t4]"));
    }

    #[test]
    fn hero_renders_profile_content() {
        let config = VitrineConfig {
            profile: Some(Profile {
                name: "Ada Lovelace".to_string(),
                skills: vec!["Engines".to_string()],
                ..Profile::default()
            }),
            ..VitrineConfig::default()
        };
        let app = App::new(Some(&config));
        let screen = render(&app);
        assert!(screen.contains("Ada Lovelace"));
        assert!(screen.contains("[Engines]"));
        assert!(screen.contains("© "));
    }

    #[test]
    fn contact_section_reflects_status_and_input() {
        let mut app = App::new(None);
        app.focus_section(SectionFocus::Contact);
        app.contact.form.name.insert_str("Ada");
        app.contact.status = SubmitStatus::Sending;
        let screen = render(&app);
        assert!(screen.contains("Ada"));
        assert!(screen.contains(SENDING_MESSAGE));

        app.contact.status = SubmitStatus::Sent;
        assert!(render(&app).contains(SENT_MESSAGE));

        app.contact.status = SubmitStatus::Failed;
        assert!(render(&app).contains(FAILED_MESSAGE));
    }
}
