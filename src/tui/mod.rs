//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the Ratatui widgets. The configurator renders into a
//! [`RecordingTarget`], and every frame is drawn from that recording.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod component;
pub mod handlers;
pub mod option_picker;
pub mod panels;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::configurator::Configurator;
use crate::constants::APP_NAME;
use crate::models::View;
use crate::render::{Control, RecordingTarget};

pub use component::{Component, ComponentEvent};
pub use option_picker::OptionPicker;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Controls of the customize view in focus order.
pub const FOCUS_ORDER: [Control; 5] = [
    Control::GarmentType,
    Control::Color,
    Control::Size,
    Control::Preview,
    Control::Reset,
];

/// Application state - single source of truth
///
/// Rendering reads `screen` immutably. Only event handlers modify state.
pub struct AppState {
    /// Selection owner and input handlers
    pub configurator: Configurator,
    /// Everything the configurator has rendered so far
    pub screen: RecordingTarget,
    /// Current UI theme
    pub theme: Theme,
    /// Focused control in the customize view
    pub focus: Control,
    /// Highlighted card in the gallery view
    pub gallery_index: usize,
    /// Open dropdown popup (if any)
    pub active_popup: Option<OptionPicker>,
    /// Status bar message
    pub status_message: String,
    /// Application configuration
    pub config: Config,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and renders the configurator's initial screen.
    #[must_use]
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        let configurator =
            Configurator::new(catalog, config.images.clone(), config.ui.start_view);
        let mut screen = RecordingTarget::new();
        configurator.initialize(&mut screen);

        Self {
            configurator,
            screen,
            theme: Theme::from_mode(config.ui.theme_mode),
            focus: Control::GarmentType,
            gallery_index: 0,
            active_popup: None,
            status_message: String::new(),
            config,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// The view currently shown.
    #[must_use]
    pub fn visible_view(&self) -> View {
        if self.screen.is_visible(View::Gallery) {
            View::Gallery
        } else {
            View::Customize
        }
    }

    /// Moves focus to the next enabled control, wrapping around.
    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    /// Moves focus to the previous enabled control, wrapping around.
    pub fn focus_previous(&mut self) {
        self.move_focus(FOCUS_ORDER.len() - 1);
    }

    fn move_focus(&mut self, step: usize) {
        let start = FOCUS_ORDER
            .iter()
            .position(|c| *c == self.focus)
            .unwrap_or(0);
        for offset in 1..=FOCUS_ORDER.len() {
            let candidate = FOCUS_ORDER[(start + offset * step) % FOCUS_ORDER.len()];
            if self.screen.is_enabled(candidate) {
                self.focus = candidate;
                return;
            }
        }
    }

    /// Moves the gallery highlight one card, wrapping around.
    pub fn move_gallery(&mut self, forward: bool) {
        let len = self.screen.gallery.len();
        if len == 0 {
            return;
        }
        self.gallery_index = if forward {
            (self.gallery_index + 1) % len
        } else {
            (self.gallery_index + len - 1) % len
        };
    }

    /// Shows a view.
    pub fn switch_view(&mut self, view: View) {
        self.configurator.switch_view(view.name(), &mut self.screen);
    }

    /// Activates the focused control: opens a dropdown or runs a button.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Control::Preview => self.preview(),
            Control::Reset => self.reset(),
            control if !self.screen.is_enabled(control) => {
                self.set_status("Choose the options above first");
            }
            control => {
                let state = self.screen.control(control);
                self.active_popup = Some(OptionPicker::new(control, state.options, &state.value));
            }
        }
    }

    /// Routes a dropdown choice to the matching handler.
    pub fn apply_option(&mut self, control: Control, value: &str) {
        match control {
            Control::GarmentType => self
                .configurator
                .handle_garment_type_change(value, &mut self.screen),
            Control::Color => self.configurator.handle_color_change(value, &mut self.screen),
            Control::Size => self.configurator.handle_size_change(value, &mut self.screen),
            Control::Preview | Control::Reset => {}
        }
        self.status_message.clear();
    }

    /// Preview action.
    ///
    /// The notice moves from the screen into the status bar, so the screen
    /// never accumulates notices over a session.
    pub fn preview(&mut self) {
        self.configurator.preview(&mut self.screen);
        match self.screen.take_notices().pop() {
            Some(notice) => self.set_status(notice),
            None => self.set_status("Choose a garment type, color, and size to preview"),
        }
    }

    /// Reset action.
    pub fn reset(&mut self) {
        self.configurator.reset_all(&mut self.screen);
        self.focus = Control::GarmentType;
        self.set_status("Selection cleared");
    }

    /// Applies the highlighted gallery card.
    pub fn apply_gallery_card(&mut self) {
        let Some(card) = self.screen.gallery.get(self.gallery_index).cloned() else {
            return;
        };
        if self.configurator.activate_preset(card.index, &mut self.screen) {
            self.focus = Control::Preview;
            self.set_status(format!("Applied {} ({})", card.title, card.subtitle));
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            // Resize events only need the redraw at the top of the loop
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar with tabs
            Constraint::Min(10),   // Visible view
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    match state.visible_view() {
        View::Gallery => panels::render_gallery(f, chunks[1], state),
        View::Customize => panels::render_customize(f, chunks[1], state),
    }

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(picker) = &state.active_popup {
        picker.render(f, centered_rect(50, 60, f.area()), &state.theme);
    }
}

/// Render title bar with the view tabs
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut spans = vec![Span::styled(
        format!(" {APP_NAME}  "),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, view) in View::ALL.into_iter().enumerate() {
        let style = if state.screen.is_tab_active(view) {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.label()), style));
        spans.push(Span::raw(" "));
    }

    let title_widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );

    f.render_widget(title_widget, area);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `true` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
