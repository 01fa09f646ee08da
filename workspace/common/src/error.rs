use thiserror::Error;

/// Error types for loading a user's activities
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The activity action answered with `success: false`
    #[error("Activity request failed: {0}")]
    Failure(String),

    /// Anything unexpected: transport, HTTP status or decoding errors
    #[error("Unexpected error while loading activities: {0}")]
    Fault(String),
}

impl FetchError {
    /// Message shown in the warning banner above the games grid.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Failure(_) => "Could not load activity data. Using default values.",
            FetchError::Fault(_) => "An unexpected error occurred. Using default values.",
        }
    }
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_differ_by_kind() {
        let failure = FetchError::Failure("db down".to_string());
        let fault = FetchError::Fault("timeout".to_string());

        assert_eq!(failure.user_message(), "Could not load activity data. Using default values.");
        assert_eq!(fault.user_message(), "An unexpected error occurred. Using default values.");
        assert!(fault.to_string().contains("timeout"));
    }
}
