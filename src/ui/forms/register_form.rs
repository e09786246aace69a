//! Registration form rendering

use super::field_renderer::{draw_error_line, draw_field, FIELD_HEIGHT};
use crate::state::{AppState, FieldPath, Focus, SUCCESS_MESSAGE};
use crate::ui::components::{render_action_button, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Total rows the form wants, borders included
pub const FORM_HEIGHT: u16 = 2 + 1 + 1 + 1 + FIELD_HEIGHT * 4 + BUTTON_HEIGHT * 2 + 1 + 1;

/// Draw the registration form
pub fn draw_register(frame: &mut Frame, area: Rect, state: &AppState) {
    let highlight = state.highlight.color();

    let block = Block::default()
        .title(Span::styled(
            " Register Form ",
            Style::default().fg(highlight).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Icon
            Constraint::Length(1),             // Success banner
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Length(BUTTON_HEIGHT), // Clear Form
            Constraint::Length(1),             // Root error
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .split(inner);

    let icon = Paragraph::new(Span::styled("👤", Style::default().fg(highlight)))
        .alignment(Alignment::Center);
    frame.render_widget(icon, chunks[0]);

    if state.show_success {
        let banner = Paragraph::new(Span::styled(
            SUCCESS_MESSAGE,
            Style::default()
                .fg(highlight)
                .bg(Color::Rgb(0xdc, 0xfc, 0xe7))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[1]);
    }

    let focus = state.form.focus();
    for (index, field) in state.form.fields().enumerate() {
        draw_field(
            frame,
            chunks[3 + index],
            field,
            focus == Focus::Field(field.path),
            state.error_for(field.path),
        );
    }

    let enabled = state.controls_enabled();
    render_action_button(
        frame,
        chunks[7],
        state.status.submit_label(),
        focus == Focus::SubmitButton,
        enabled,
        Some(highlight),
    );
    render_button(
        frame,
        chunks[8],
        "Clear Form",
        focus == Focus::ClearButton,
        enabled,
    );

    if let Some(message) = state.error_for(FieldPath::Root) {
        draw_error_line(frame, chunks[9], message);
    }

    draw_help_text(frame, chunks[10], state);
}

/// Key hints for the focused element
fn draw_help_text(frame: &mut Frame, area: Rect, state: &AppState) {
    let enter_hint = match state.form.focus() {
        Focus::ClearButton => ": clear  ",
        _ => ": submit  ",
    };
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(enter_hint),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
