//! Key event handling for the TUI

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::event::Event;

/// Route an event to the appropriate handler
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::FocusGained => {
            app.refresh_day();
            Ok(())
        }
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ignore key releases (Windows terminals report both)
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Dialogs capture all input
    if app.active_dialog == ActiveDialog::ConfirmClear {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.clear_today();
                app.active_dialog = ActiveDialog::None;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.active_dialog = ActiveDialog::None;
            }
            _ => {}
        }
        return Ok(());
    }

    // Entry form captures all input while typing
    if app.input_mode == InputMode::EnteringAmount {
        match key.code {
            KeyCode::Enter => app.submit_amount_input(),
            KeyCode::Esc => {
                app.amount_input.clear();
                app.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                app.amount_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                app.amount_input.push(c);
            }
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => {
            app.active_view = match app.active_view {
                ActiveView::Dashboard => ActiveView::Week,
                ActiveView::Week => ActiveView::Dashboard,
            };
        }
        // Quick-amount chips
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c.to_digit(10).unwrap_or(0) as usize;
            app.quick_add(slot);
        }
        KeyCode::Char('a') => {
            app.input_mode = InputMode::EnteringAmount;
            app.amount_input.clear();
        }
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('x') => {
            app.active_dialog = ActiveDialog::ConfirmClear;
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        _ => {}
    }

    Ok(())
}
