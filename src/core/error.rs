/// Harness-wide Result type
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Main harness error type
///
/// Everything except `Configuration` and `Io` is produced while a case runs and
/// is turned into a failing outcome at the case boundary.
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    /// Response received but its status or shape did not match the contract
    #[error("{check}: {message}")]
    Assertion { check: String, message: String },

    /// A case cannot run because an earlier case produced nothing to work with
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Request could not be completed (connect, timeout, middleware)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// Response body could not be read
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Report output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper functions for common error scenarios
impl HarnessError {
    pub fn assertion(check: impl Into<String>, message: impl Into<String>) -> Self {
        HarnessError::Assertion {
            check: check.into(),
            message: message.into(),
        }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        HarnessError::Precondition(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        HarnessError::Configuration(msg.into())
    }
}
