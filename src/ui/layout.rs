//! Layout components (form area, status bar)

use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, SubmissionStatus};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form gets on large terminals
const FORM_MAX_WIDTH: u16 = 60;

/// Split the screen into content and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a box of at most `max_width` x `height` inside `area`
pub fn centered_rect(area: Rect, max_width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [column] = Layout::horizontal([Constraint::Length(max_width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    column
}

/// Area of the form within the content region
pub fn form_area(content: Rect, form_height: u16) -> Rect {
    centered_rect(content, FORM_MAX_WIDTH, form_height)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let (indicator, label) = match state.status {
        SubmissionStatus::Idle => (
            Span::styled(" ○ ", Style::default().fg(Color::DarkGray)),
            "Ready",
        ),
        SubmissionStatus::Submitting { .. } => (
            Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
            "Registering...",
        ),
        SubmissionStatus::Succeeded { .. } => (
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            "Registered",
        ),
        SubmissionStatus::Failed => (
            Span::styled(" ● ", Style::default().fg(Color::Red)),
            "Submission failed",
        ),
    };

    let spans = vec![
        indicator,
        Span::raw(label),
        Span::raw(" | "),
        Span::styled(
            format!("{SUBMIT_SHORTCUT}: register  {CLEAR_SHORTCUT}: clear form"),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_centered_rect_caps_width() {
        let rect = centered_rect(Rect::new(0, 0, 100, 40), 60, 30);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 30);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 5);
    }

    #[test]
    fn test_centered_rect_shrinks_to_small_area() {
        let rect = centered_rect(Rect::new(0, 0, 40, 10), 60, 30);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }
}
