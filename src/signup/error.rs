//! Signup failure taxonomy

use thiserror::Error;

/// Errors raised by a signup call; the `Display` text becomes the form's root error detail
#[allow(dead_code)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignupError {
    /// Backend answered with a non-success status
    #[error("Submission failed with status {0}")]
    Status(u16),
    /// The request never got an answer
    #[error("Transport error: {0}")]
    Transport(String),
    /// The request body could not be encoded
    #[error("Could not encode request: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for SignupError {
    fn from(value: serde_json::Error) -> Self {
        SignupError::Serialize(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(
            SignupError::Status(503).to_string(),
            "Submission failed with status 503"
        );
    }

    #[test]
    fn test_transport_display() {
        assert_eq!(
            SignupError::Transport("connection refused".to_string()).to_string(),
            "Transport error: connection refused"
        );
    }
}
