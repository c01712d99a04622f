//! Component trait pattern for TUI components.
//!
//! Popups implement [`Component`]: they own their state, consume key input,
//! and report back to [`AppState`](super::AppState) through events.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::render::Control;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the parent needs to act, `None` if the input
    /// was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Returns `true` once the component has finished and should be closed.
    fn should_close(&self) -> bool {
        false
    }
}

/// Events emitted by popup components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User picked a dropdown option
    OptionChosen {
        /// Dropdown the option belongs to
        control: Control,
        /// Option value ("" for the placeholder)
        value: String,
    },
    /// User dismissed the popup without choosing
    Cancelled,
}
