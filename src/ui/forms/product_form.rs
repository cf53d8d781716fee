//! Product form rendering

use super::field_renderer::{draw_selection_field, draw_text_field, SelectionView};
use crate::app::App;
use crate::state::{FieldName, Focus, FormPhase};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the product form with its action buttons
pub fn draw_product_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Product Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Product name
            Constraint::Length(5),             // Description
            Constraint::Length(3),             // Image path
            Constraint::Length(3),             // Price
            Constraint::Length(6),             // States
            Constraint::Min(5),                // Cities
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(inner);

    let focus = app.state.focus();
    let form = &app.form;

    for (idx, field) in [
        FieldName::ProductName,
        FieldName::ProductDescription,
        FieldName::ProductImage,
        FieldName::ProductPrice,
    ]
    .into_iter()
    .enumerate()
    {
        let error = form.errors().message(field);
        let label = match field {
            FieldName::ProductImage => "Product Image (path to JPG/PNG)",
            _ => field.label(),
        };
        draw_text_field(
            frame,
            chunks[idx],
            label,
            app.state.inputs.get(field).unwrap_or_default(),
            focus == Focus::Field(field),
            field.is_multiline(),
            error.as_deref(),
        );
    }

    for (idx, field) in [FieldName::States, FieldName::Cities].into_iter().enumerate() {
        let options = form.options(field);
        let error = form.errors().message(field);
        draw_selection_field(
            frame,
            chunks[4 + idx],
            SelectionView {
                label: field.label(),
                options: &options,
                selected: form.selection(field),
                cursor: app.state.list_cursor,
                is_active: focus == Focus::Field(field),
                is_disabled: form.is_disabled(field),
                error: error.as_deref(),
            },
        );
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Submit
            Constraint::Length(14), // Reset
            Constraint::Min(0),
        ])
        .split(chunks[6]);

    render_action_button(
        frame,
        buttons[0],
        "Submit",
        focus == Focus::Submit,
        form.phase() != FormPhase::Submitting,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        buttons[1],
        "Reset",
        focus == Focus::Reset,
        true,
        Some(Color::Gray),
    );
}
