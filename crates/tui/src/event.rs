//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use explorer::Dataset;

use crate::app::{App, InputMode};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ignore key releases reported by some terminals
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Global shortcuts (work in all modes)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') if app.input_mode == InputMode::Normal => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if app.input_mode.is_editing() {
        handle_editing_mode(app, key);
    } else {
        handle_normal_mode(app, key);
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Tab navigation
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Char(c @ '1'..='3') => app.goto_tab(c as u8 - b'0'),

        KeyCode::Char('a') => {
            app.start_editing(InputMode::EditingQuestion);
        }
        KeyCode::Char('r') => {
            app.set_status(format!("Refreshing {}...", app.current_tab));
            app.refresh();
        }

        // Tab-specific actions
        _ => {
            if app.current_tab == Dataset::Stock {
                handle_stock_tab_keys(app, key);
            }
        }
    }
}

fn handle_stock_tab_keys(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('s') | KeyCode::Enter) {
        app.start_editing(InputMode::EditingSymbol);
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_editing();
            app.set_status("Cancelled.");
        }
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
