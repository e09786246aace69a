//! Form domain layer
//!
//! Type-safe form handling for the registration view: input fields, focus
//! order, and the validation schema.

mod field;
mod form_state;
pub mod schema;

pub use field::FormField;
pub use form_state::{Focus, Form, RegistrationForm};
pub use schema::{validate, FieldErrors, FieldPath, RegistrationInput};
