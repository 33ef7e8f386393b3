//! Hero/profile section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use vitrine_engine::App;
use vitrine_types::ui::SectionFocus;

use crate::theme::{Glyphs, Palette};
use crate::section_block;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let profile = app.profile();
    let focused = app.view.focus == SectionFocus::Profile;
    let block = section_block("Profile", focused, palette);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Hi, I'm ", Style::default().fg(palette.text_secondary)),
        Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        profile.headline.clone(),
        Style::default().fg(palette.text_secondary),
    )));
    lines.push(Line::from(""));

    if !profile.skills.is_empty() {
        let mut spans = Vec::new();
        for (i, skill) in profile.skills.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!("[{skill}]"),
                Style::default().fg(palette.tag),
            ));
        }
        lines.push(Line::from(spans));
    }

    let links = profile.links();
    if !links.is_empty() {
        let mut spans = Vec::new();
        for (i, (label, target)) in links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    format!(" {} ", glyphs.bullet),
                    Style::default().fg(palette.text_muted),
                ));
            }
            spans.push(Span::styled(
                format!("{label} "),
                Style::default().fg(palette.text_muted),
            ));
            spans.push(Span::styled(
                (*target).to_string(),
                Style::default().fg(palette.link),
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
