//! Registration form struct and focus handling

use super::field::{FieldKind, FormField};
use super::schema::{FieldPath, RegistrationInput};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldPath),
    SubmitButton,
    ClearButton,
}

/// The four registration inputs plus the two buttons
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub const SUBMIT_INDEX: usize = 4;
    pub const CLEAR_INDEX: usize = 5;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldPath::Name, "Name", "John", FieldKind::Text),
            email: FormField::new(
                FieldPath::Email,
                "Email",
                "example@email.com",
                FieldKind::Email,
            ),
            password: FormField::new(
                FieldPath::Password,
                "Password",
                "password",
                FieldKind::Password,
            ),
            confirm_password: FormField::new(
                FieldPath::ConfirmPassword,
                "Confirm Password",
                "confirmpassword",
                FieldKind::Password,
            ),
            active_field_index: 0,
        }
    }

    pub fn focus(&self) -> Focus {
        match self.active_field_index {
            0 => Focus::Field(FieldPath::Name),
            1 => Focus::Field(FieldPath::Email),
            2 => Focus::Field(FieldPath::Password),
            3 => Focus::Field(FieldPath::ConfirmPassword),
            Self::SUBMIT_INDEX => Focus::SubmitButton,
            _ => Focus::ClearButton,
        }
    }

    /// The inputs in display order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        (0..self.field_count()).filter_map(|index| self.get_field(index))
    }

    /// Snapshot the current values as a candidate for validation
    pub fn to_input(&self) -> RegistrationInput {
        RegistrationInput::new(
            self.name.as_text(),
            self.email.as_text(),
            self.password.as_text(),
            self.confirm_password.as_text(),
        )
    }

    /// Clear all values; focus stays where it is
    pub fn clear_values(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        6 // four inputs, Register, Clear Form
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::CLEAR_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            3 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            // Button slots have no FormField
            _ => None,
        }
    }
}
