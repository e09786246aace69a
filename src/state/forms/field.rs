//! Form field value objects

use super::schema::FieldPath;

/// Input kind, mirrors the HTML input types of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

/// Represents a single form input with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub path: FieldPath,
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(path: FieldPath, label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            path,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering; password input is masked
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Password => "•".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Email => self.value.clone(),
        }
    }
}
