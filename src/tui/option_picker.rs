//! Dropdown popup for the garment type, color, and size selectors.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::render::{Control, SelectOption};

/// Popup listing a dropdown's options.
#[derive(Debug, Clone)]
pub struct OptionPicker {
    control: Control,
    options: Vec<SelectOption>,
    list_state: ListState,
    closed: bool,
}

impl OptionPicker {
    /// Opens a picker with the row for `current` highlighted (first row if absent).
    #[must_use]
    pub fn new(control: Control, options: Vec<SelectOption>, current: &str) -> Self {
        let selected = options
            .iter()
            .position(|option| option.value == current)
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !options.is_empty() {
            list_state.select(Some(selected));
        }

        Self {
            control,
            options,
            list_state,
            closed: false,
        }
    }

    /// Dropdown this picker edits.
    #[must_use]
    pub const fn control(&self) -> Control {
        self.control
    }

    /// Highlighted option.
    #[must_use]
    pub fn selected(&self) -> Option<&SelectOption> {
        self.list_state.selected().and_then(|i| self.options.get(i))
    }

    /// Move highlight up, wrapping to the last row.
    pub fn previous(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(next));
    }

    /// Move highlight down, wrapping to the first row.
    pub fn next(&mut self) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }
}

impl Component for OptionPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => {
                self.closed = true;
                Some(ComponentEvent::Cancelled)
            }
            KeyCode::Enter => {
                self.closed = true;
                Some(self.selected().map_or(ComponentEvent::Cancelled, |option| {
                    ComponentEvent::OptionChosen {
                        control: self.control,
                        value: option.value.clone(),
                    }
                }))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let style = if option.is_placeholder() {
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(theme.text)
                };
                ListItem::new(Line::from(Span::styled(option.label.clone(), style)))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Select {} ", self.control.label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, area, &mut list_state);

        if area.height > 2 && area.width > 4 {
            let instructions_area = Rect {
                x: area.x + 2,
                y: area.y + area.height - 2,
                width: area.width - 4,
                height: 1,
            };
            let instructions = Paragraph::new(Line::from(vec![
                Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Navigate  "),
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Select  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" Cancel"),
            ]));
            f.render_widget(instructions, instructions_area);
        }
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}
