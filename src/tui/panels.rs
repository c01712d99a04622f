//! Gallery and customize panels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme, FOCUS_ORDER};
use crate::render::{Control, DisplayContent, SummaryContent};
use crate::services::capitalize;

/// Render the preset cards as a selectable list
pub fn render_gallery(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let items: Vec<ListItem> = state
        .screen
        .gallery
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    card.title.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(card.subtitle.clone(), Style::default().fg(theme.text_muted)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Gallery ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    if !state.screen.gallery.is_empty() {
        list_state.select(Some(state.gallery_index));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the dropdown form next to the preview and summary
pub fn render_customize(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_form(f, columns[0], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(6)])
        .split(columns[1]);

    render_display(f, right[0], state);
    render_summary(f, right[1], state);
}

fn render_form(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let mut lines = Vec::new();

    for control in Control::SELECTORS {
        let focused = state.focus == control;
        let enabled = state.screen.is_enabled(control);
        let control_state = state.screen.control(control);
        let shown = control_state
            .options
            .iter()
            .find(|option| option.value == control_state.value)
            .map_or_else(|| control.placeholder_text(), |option| option.label.clone());

        lines.push(Line::from(Span::styled(
            capitalize(&control.label()),
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(vec![
            Span::raw(if focused { "► " } else { "  " }),
            Span::styled(format!("[ {shown} ▾ ]"), theme.control_style(focused, enabled)),
        ]));
        lines.push(Line::from(""));
    }

    let mut buttons = vec![Span::raw("  ")];
    for control in FOCUS_ORDER.into_iter().filter(|c| !Control::SELECTORS.contains(c)) {
        let text = match control {
            Control::Preview => "[ Preview ]",
            _ => "[ Reset ]",
        };
        buttons.push(Span::styled(
            text,
            theme.control_style(state.focus == control, state.screen.is_enabled(control)),
        ));
        buttons.push(Span::raw("  "));
    }
    lines.push(Line::from(buttons));

    let form = Paragraph::new(lines).block(
        Block::default()
            .title(" Customize ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(form, area);
}

fn render_display(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let lines = match &state.screen.display {
        Some(DisplayContent::Image { src, alt, .. }) => vec![
            Line::from(Span::styled(
                alt.clone(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                src.clone(),
                Style::default().fg(theme.text_muted),
            )),
        ],
        Some(DisplayContent::Placeholder { message }) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        ))],
        None => Vec::new(),
    };

    let display = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(display, area);
}

fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let theme: &Theme = &state.theme;
    let lines = match &state.screen.summary {
        Some(SummaryContent::Items { items }) => items
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", item.label),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(item.value.clone(), Style::default().fg(theme.text)),
                ])
            })
            .collect(),
        Some(SummaryContent::Empty { message }) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.text_muted),
        ))],
        None => Vec::new(),
    };

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(summary, area);
}
