//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::models::View;
use crate::tui::AppState;

/// Handle input when no popup is open. Returns `true` when the user quits.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('1') => state.switch_view(View::Gallery),
        KeyCode::Char('2') => state.switch_view(View::Customize),
        KeyCode::Char('p') => state.preview(),
        KeyCode::Char('r') => state.reset(),
        _ => match state.visible_view() {
            View::Gallery => handle_gallery_key(state, key.code),
            View::Customize => handle_customize_key(state, key.code),
        },
    }
    Ok(false)
}

fn handle_gallery_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
            state.move_gallery(true);
        }
        KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
            state.move_gallery(false);
        }
        KeyCode::Enter => state.apply_gallery_card(),
        _ => {}
    }
}

fn handle_customize_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => state.focus_previous(),
        KeyCode::Enter => state.activate_focused(),
        _ => {}
    }
}
