//! UI module for rendering the TUI
//!
//! Rendering is a pure function of [`AppState`]; nothing here mutates state.

mod components;
mod forms;
mod layout;

use crate::state::AppState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    let form_area = layout::form_area(content_area, forms::FORM_HEIGHT);
    forms::draw_register(frame, form_area, state);

    layout::draw_status_bar(frame, status_area, state);
}
