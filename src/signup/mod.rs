//! Signup client module
//!
//! The form talks to its backend through [`SignupClient`]. The only
//! implementation today is [`SimulatedSignupClient`], which waits and succeeds.

mod client;
mod error;
mod traits;

pub use client::{SimulatedSignupClient, DEFAULT_SIGNUP_ENDPOINT};
pub use error::SignupError;
pub use traits::SignupClient;

#[cfg(test)]
pub use traits::MockSignupClient;
