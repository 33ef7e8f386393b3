//! Contact form section.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use vitrine_engine::App;
use vitrine_types::ui::{FieldInput, SectionFocus};
use vitrine_types::{ContactField, SubmitStatus};

use crate::section_block;
use crate::theme::{Glyphs, Palette};

pub(crate) const SENDING_MESSAGE: &str = "Sending...";
pub(crate) const SENT_MESSAGE: &str = "Message sent. Thank you!";
pub(crate) const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.view.focus == SectionFocus::Contact;
    let block = section_block("Contact", focused, palette);
    let width = area.width.saturating_sub(4) as usize;

    let mut lines = Vec::with_capacity(5);
    lines.push(Line::from(Span::styled(
        "Have a project in mind? Send a message.",
        Style::default().fg(palette.text_muted),
    )));

    for field in ContactField::ALL {
        let editing = focused && app.contact.form.focus == field;
        lines.push(field_line(
            field,
            app.contact.form.field(field),
            editing,
            width,
            palette,
            glyphs,
        ));
    }

    lines.push(status_line(app.contact.status, palette));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn field_line(
    field: ContactField,
    input: &FieldInput,
    editing: bool,
    width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let label_style = if editing {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_muted)
    };

    // Single-line rendering; newlines in the message field survive in the
    // payload but display as spaces.
    let value = input.value().replace('\n', " ");
    let shown = if editing {
        let cursor = input.cursor();
        let raw = input.value();
        let mut composed = String::with_capacity(value.len() + glyphs.cursor.len());
        composed.push_str(&raw[..cursor].replace('\n', " "));
        composed.push_str(glyphs.cursor);
        composed.push_str(&raw[cursor..].replace('\n', " "));
        composed
    } else {
        value
    };

    let label = format!("{:<8} ", field.label());
    let value_width = width.saturating_sub(label.len());
    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(
            crate::fit_width(&shown, value_width, glyphs),
            Style::default().fg(palette.text_primary),
        ),
    ])
}

fn status_line(status: SubmitStatus, palette: &Palette) -> Line<'static> {
    match status {
        SubmitStatus::Idle => Line::from(""),
        SubmitStatus::Sending => Line::from(Span::styled(
            SENDING_MESSAGE,
            Style::default().fg(palette.warning),
        )),
        SubmitStatus::Sent => Line::from(Span::styled(
            SENT_MESSAGE,
            Style::default().fg(palette.success),
        )),
        SubmitStatus::Failed => Line::from(Span::styled(
            FAILED_MESSAGE,
            Style::default().fg(palette.error),
        )),
    }
}
