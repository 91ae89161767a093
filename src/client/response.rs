use reqwest::StatusCode;
use serde_json::Value;

use crate::core::{HarnessError, Result};

/// Status and raw body of one API call
///
/// The body is kept as text and parsed on demand, so a malformed body only
/// matters when the status says it should be readable.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Parse the body as JSON; an empty body reads as `null`
    pub fn json(&self) -> Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Fail `check` unless the status is `expected`.
    ///
    /// The failure message reads "`<action>` failed with status `<code>`".
    pub fn expect_status(&self, expected: StatusCode, check: &str, action: &str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(HarnessError::assertion(
                check,
                format!("{} failed with status {}", action, self.status.as_u16()),
            ))
        }
    }

    /// Status check followed by JSON parsing of the body
    pub fn expect_json(&self, expected: StatusCode, check: &str, action: &str) -> Result<Value> {
        self.expect_status(expected, check, action)?;
        self.json()
    }

    /// Status check for calls that must be rejected; the body is ignored
    pub fn expect_rejection(&self, expected: StatusCode, check: &str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(HarnessError::assertion(
                check,
                format!("Expected {}, got {}", expected.as_u16(), self.status.as_u16()),
            ))
        }
    }
}
