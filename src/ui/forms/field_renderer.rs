//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form input with its validation message directly below it
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error message
        ])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value_span = if field.is_empty() {
        Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(field.display_value(), Style::default().fg(Color::Gray))
    };

    // Cursor sits before the placeholder, after typed text
    let line = if field.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    if let Some(message) = error {
        draw_error_line(frame, chunks[1], message);
    }
}

/// Single red message line
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(paragraph, area);
}
