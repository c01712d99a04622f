//! Dropdown popup input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::{AppState, Component, ComponentEvent};

/// Handle input while a dropdown popup is open
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(picker) = state.active_popup.as_mut() else {
        return Ok(false);
    };

    let event = picker.handle_input(key);
    if picker.should_close() {
        state.active_popup = None;
    }

    match event {
        Some(ComponentEvent::OptionChosen { control, value }) => {
            state.apply_option(control, &value);
        }
        Some(ComponentEvent::Cancelled) => state.set_status("Cancelled"),
        None => {}
    }

    Ok(false)
}
