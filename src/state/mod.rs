//! Application state module

mod app_state;
pub mod forms;
mod submission;
mod tasks;

pub use app_state::*;
pub use forms::*;
pub use submission::*;
pub use tasks::*;
