//! Form rendering module
//!
//! - `field_renderer`: input box plus error line
//! - `register_form`: the registration form

mod field_renderer;
mod register_form;

pub use register_form::{draw_register, FORM_HEIGHT};
