//! Project gallery: one card per feed record, in backend order.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use vitrine_engine::App;
use vitrine_types::ui::SectionFocus;
use vitrine_types::{FeedPhase, Project};

use crate::section_block;
use crate::theme::{Glyphs, Palette, spinner_frame};

/// Shown when the feed could not be loaded. The gallery stays empty; nothing
/// else recovers or retries.
pub(crate) const FEED_UNAVAILABLE_MESSAGE: &str =
    "Couldn't load projects. Showing an empty gallery.";

/// Shown when the backend has no projects yet.
pub(crate) const FEED_EMPTY_MESSAGE: &str = "No projects yet. Seed the backend with sample data:";

pub(crate) const LOADING_MESSAGE: &str = "Loading projects";

/// Lines per card, blank separator included. Cards are fixed-height so the
/// scroll offset is a plain multiplication.
const CARD_HEIGHT: usize = 6;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.view.focus == SectionFocus::Projects;
    let projects = app.feed.phase.projects();

    let title = if projects.is_empty() {
        "Projects".to_string()
    } else {
        format!("Projects ({})", projects.len())
    };
    let block = section_block(&title, focused, palette);
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(4) as usize;

    let lines = match &app.feed.phase {
        FeedPhase::Loading => {
            let elapsed = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            let frame_glyph = spinner_frame(glyphs, app.ui_options(), elapsed);
            vec![Line::from(vec![
                Span::styled(frame_glyph, Style::default().fg(palette.accent)),
                Span::styled(
                    format!(" {LOADING_MESSAGE}{}", glyphs.ellipsis),
                    Style::default().fg(palette.text_muted),
                ),
            ])]
        }
        FeedPhase::Failed => vec![Line::from(Span::styled(
            FEED_UNAVAILABLE_MESSAGE,
            Style::default().fg(palette.error),
        ))],
        FeedPhase::Ready(items) if items.is_empty() => empty_state_lines(app, palette),
        FeedPhase::Ready(items) => card_list_lines(
            items,
            app.view.selected_project,
            focused,
            inner_width,
            palette,
            glyphs,
        ),
    };

    let scroll = scroll_offset(
        &app.feed.phase,
        app.view.selected_project,
        lines.len(),
        inner_height,
    );
    let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn empty_state_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            FEED_EMPTY_MESSAGE,
            Style::default().fg(palette.text_muted),
        )),
        Line::from(Span::styled(
            app.seed_url(),
            Style::default().fg(palette.link),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press s to copy the link",
            Style::default().fg(palette.text_muted),
        )),
    ]
}

fn card_list_lines(
    items: &[Project],
    selected: usize,
    focused: bool,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(items.len() * CARD_HEIGHT);
    for (index, project) in items.iter().enumerate() {
        lines.extend(card_lines(
            project,
            focused && index == selected,
            width,
            palette,
            glyphs,
        ));
    }
    lines
}

/// Exactly [`CARD_HEIGHT`] lines per card; optional fields render as blank
/// lines to keep scrolling arithmetic trivial.
fn card_lines(
    project: &Project,
    selected: bool,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let marker = if selected {
        glyphs.selected
    } else {
        glyphs.unselected
    };
    let title_style = if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = Vec::with_capacity(CARD_HEIGHT);
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
        Span::styled(project.title.clone(), title_style),
    ]));

    lines.push(match project.subtitle.as_deref() {
        Some(subtitle) => Line::from(Span::styled(
            format!("  {subtitle}"),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )),
        None => Line::from(""),
    });

    let mut tag_spans = vec![Span::raw("  ")];
    for (i, tag) in project.visible_tags().iter().enumerate() {
        if i > 0 {
            tag_spans.push(Span::raw(" "));
        }
        tag_spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(palette.tag),
        ));
    }
    lines.push(Line::from(tag_spans));

    lines.push(Line::from(Span::styled(
        format!(
            "  {}",
            crate::fit_width(&project.description.replace('\n', " "), width, glyphs)
        ),
        Style::default().fg(palette.text_secondary),
    )));

    let mut link_spans = vec![Span::raw("  ")];
    if let Some(demo) = project.demo_url.as_deref() {
        link_spans.push(Span::styled("Demo ", Style::default().fg(palette.text_muted)));
        link_spans.push(Span::styled(
            demo.to_string(),
            Style::default().fg(palette.link),
        ));
    }
    if let Some(repo) = project.repo_url.as_deref() {
        if link_spans.len() > 1 {
            link_spans.push(Span::raw("   "));
        }
        link_spans.push(Span::styled("Repo ", Style::default().fg(palette.text_muted)));
        link_spans.push(Span::styled(
            repo.to_string(),
            Style::default().fg(palette.link),
        ));
    }
    lines.push(Line::from(link_spans));

    lines.push(Line::from(""));
    lines
}

/// Keep the selected card in view; informational states never scroll.
fn scroll_offset(phase: &FeedPhase, selected: usize, total_lines: usize, viewport: usize) -> u16 {
    if !matches!(phase, FeedPhase::Ready(items) if !items.is_empty()) {
        return 0;
    }
    if total_lines <= viewport || viewport == 0 {
        return 0;
    }
    let max_offset = total_lines - viewport;
    (selected * CARD_HEIGHT).min(max_offset) as u16
}

#[cfg(test)]
mod tests {
    use vitrine_types::FeedPhase;

    use super::scroll_offset;

    fn ready(count: usize) -> FeedPhase {
        let items = (0..count)
            .map(|i| vitrine_types::Project {
                id: i.to_string(),
                title: i.to_string(),
                subtitle: None,
                description: String::new(),
                tags: Vec::new(),
                image_url: None,
                demo_url: None,
                repo_url: None,
            })
            .collect();
        FeedPhase::Ready(items)
    }

    #[test]
    fn no_scroll_when_everything_fits() {
        assert_eq!(scroll_offset(&ready(2), 1, 12, 20), 0);
    }

    #[test]
    fn scrolls_to_selected_card() {
        // 10 cards of 6 lines in a 12-line viewport.
        assert_eq!(scroll_offset(&ready(10), 0, 60, 12), 0);
        assert_eq!(scroll_offset(&ready(10), 3, 60, 12), 18);
        // Last cards clamp to the bottom of the content.
        assert_eq!(scroll_offset(&ready(10), 9, 60, 12), 48);
    }

    #[test]
    fn informational_states_never_scroll() {
        assert_eq!(scroll_offset(&FeedPhase::Loading, 5, 1, 0), 0);
        assert_eq!(scroll_offset(&FeedPhase::Failed, 5, 1, 0), 0);
    }
}
