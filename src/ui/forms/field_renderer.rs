//! Field rendering utilities for forms

use crate::state::SelectOption;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the bordered block shared by all fields; errors go in the bottom title
fn field_block<'a>(label: &str, is_active: bool, error: Option<&str>) -> Block<'a> {
    let border_style = match (is_active, error.is_some()) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a free-text field with an optional error message
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(label, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// What a multi-select field needs to render
pub struct SelectionView<'a> {
    pub label: &'a str,
    pub options: &'a [SelectOption],
    pub selected: &'a [SelectOption],
    pub cursor: usize,
    pub is_active: bool,
    pub is_disabled: bool,
    pub error: Option<&'a str>,
}

/// Draw a multi-select list with checkboxes
pub fn draw_selection_field(frame: &mut Frame, area: Rect, view: SelectionView) {
    let lines: Vec<Line> = if view.is_disabled {
        vec![Line::from(Span::styled(
            "(select a state first)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if view.options.is_empty() {
        vec![Line::from(Span::styled(
            "(no options)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.options
            .iter()
            .enumerate()
            .map(|(idx, option)| {
                let checked = view.selected.iter().any(|s| s.value == option.value);
                let marker = if checked { "[x]" } else { "[ ]" };
                let style = if view.is_active && idx == view.cursor {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else if checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{marker} {}", option.label), style))
            })
            .collect()
    };

    // Keep the cursor row visible
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = if view.is_active && inner_height > 0 && view.cursor >= inner_height {
        (view.cursor + 1 - inner_height) as u16
    } else {
        0
    };

    let block = field_block(view.label, view.is_active, view.error);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)).block(block), area);
}
