//! Input handling for the Vitrine TUI.
//!
//! Non-blocking: the frame loop calls [`handle_events`] once per frame,
//! which drains whatever crossterm has queued and applies it to the [`App`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use vitrine_engine::App;
use vitrine_types::ContactField;
use vitrine_types::ui::SectionFocus;

/// Upper bound on events applied per frame to keep rendering responsive.
const MAX_EVENTS_PER_FRAME: usize = 64;

/// Drain pending input. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME && event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            apply_key(app, key);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

fn apply_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits, even mid-edit.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.view.focus {
        SectionFocus::Contact => apply_contact_key(app, key),
        focus => apply_browse_key(app, key, focus),
    }
}

fn apply_browse_key(app: &mut App, key: KeyEvent, focus: SectionFocus) {
    match key.code {
        KeyCode::Tab => app.focus_next_section(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') if focus == SectionFocus::Projects => {
            app.select_prev_project();
        }
        KeyCode::Down | KeyCode::Char('j') if focus == SectionFocus::Projects => {
            app.select_next_project();
        }
        KeyCode::Char('d') if focus == SectionFocus::Projects => {
            let url = app.selected_demo_url().map(str::to_string);
            copy_link(app, url, "Demo link");
        }
        KeyCode::Char('r') if focus == SectionFocus::Projects => {
            let url = app.selected_repo_url().map(str::to_string);
            copy_link(app, url, "Repo link");
        }
        KeyCode::Char('s') if focus == SectionFocus::Projects => {
            let url = app.seed_url();
            copy_link(app, Some(url), "Seed link");
        }
        _ => {}
    }
}

fn apply_contact_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Esc leaves the form without submitting; Tab/Enter walk the fields.
        KeyCode::Esc => app.focus_section(SectionFocus::Profile),
        KeyCode::Tab | KeyCode::Down => app.contact.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact.form.focus_prev(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.submit_contact();
        }
        KeyCode::Enter => {
            if app.contact.form.focus == ContactField::Message {
                app.contact.form.focused_mut().insert('\n');
            } else {
                app.contact.form.focus_next();
            }
        }
        KeyCode::Backspace => app.contact.form.focused_mut().backspace(),
        KeyCode::Left => app.contact.form.focused_mut().move_left(),
        KeyCode::Right => app.contact.form.focused_mut().move_right(),
        KeyCode::Home => app.contact.form.focused_mut().move_home(),
        KeyCode::End => app.contact.form.focused_mut().move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.contact.form.focused_mut().insert(c);
        }
        _ => {}
    }
}

fn copy_link(app: &mut App, url: Option<String>, label: &str) {
    let Some(url) = url else {
        app.push_notice(format!("{label} not available"));
        return;
    };
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
        Ok(()) => app.push_notice(format!("{label} copied")),
        Err(err) => {
            tracing::warn!(%err, "Clipboard unavailable");
            app.push_notice("Clipboard unavailable");
        }
    }
}
