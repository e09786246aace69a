//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit/clear shortcuts
/// - macOS terminals forward Cmd to the emulator, so Ctrl is used everywhere
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear form shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+R";
