//! Status bar widget for displaying notices and contextual help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::models::View;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the latest notice above a line of key hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if state.status_message.is_empty() {
            Line::from("")
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        };

        let status = Paragraph::new(vec![message_line, Self::help_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the current context
    #[must_use]
    pub fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        if state.active_popup.is_some() {
            &[("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Cancel")]
        } else if state.screen.is_visible(View::Gallery) {
            &[
                ("↑↓", "Move"),
                ("Enter", "Apply"),
                ("2", "Customize"),
                ("q", "Quit"),
            ]
        } else {
            &[
                ("Tab", "Next"),
                ("Enter", "Open"),
                ("p", "Preview"),
                ("r", "Reset"),
                ("1", "Gallery"),
                ("q", "Quit"),
            ]
        }
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];

        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(*action));
        }

        Line::from(spans)
    }
}
