//! Event handler for the TUI
//!
//! Routes keyboard events to the landing screen or the active dialog.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::Booking => dialogs::booking::handle_key(app, key, now),
        ActiveDialog::Help => {
            // Close help on any key
            app.close_help();
        }
        ActiveDialog::None => handle_landing_key(app, key),
    }

    Ok(())
}

/// Keys on the landing screen
fn handle_landing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') | KeyCode::F(1) => app.open_help(),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => app.open_booking(),
        _ => {}
    }
}
