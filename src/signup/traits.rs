//! Trait abstraction for the signup backend to enable mocking in tests

use super::error::SignupError;
use crate::state::RegistrationInput;
use async_trait::async_trait;

/// Trait for signup operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupClient: Send + Sync {
    /// Register a new account from validated form input
    async fn sign_up(&self, request: &RegistrationInput) -> Result<(), SignupError>;
}
