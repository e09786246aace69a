//! Simulated signup client
//!
//! Stands in for `POST <endpoint>` with a JSON body of the form values. No
//! request leaves the process: the client waits for the configured delay and
//! reports success.

use super::error::SignupError;
use super::traits::SignupClient;
use crate::state::RegistrationInput;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default signup endpoint
pub const DEFAULT_SIGNUP_ENDPOINT: &str = "/api/signup";

/// Client that simulates the network round trip
#[derive(Debug, Clone)]
pub struct SimulatedSignupClient {
    endpoint: String,
    delay: Duration,
}

impl SimulatedSignupClient {
    pub fn new(endpoint: impl Into<String>, delay: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            delay,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// JSON body as it would be posted, with password values blanked for logging
    pub fn redacted_body(request: &RegistrationInput) -> Result<Value, SignupError> {
        let mut body = serde_json::to_value(request)?;
        if let Some(map) = body.as_object_mut() {
            for key in ["password", "confirmPassword"] {
                if let Some(value) = map.get_mut(key) {
                    *value = Value::String("<redacted>".to_string());
                }
            }
        }
        Ok(body)
    }
}

#[async_trait]
impl SignupClient for SimulatedSignupClient {
    async fn sign_up(&self, request: &RegistrationInput) -> Result<(), SignupError> {
        let body = Self::redacted_body(request)?;
        tracing::info!(endpoint = %self.endpoint, %body, "Simulating signup request");

        tokio::time::sleep(self.delay).await;

        tracing::debug!(endpoint = %self.endpoint, "Simulated signup completed");
        Ok(())
    }
}
