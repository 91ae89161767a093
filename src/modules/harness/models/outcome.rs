use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of one check, fixed once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub test: String,
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Value>,
}

impl TestOutcome {
    pub fn new(
        test: impl Into<String>,
        success: bool,
        message: impl Into<String>,
        response_data: Option<Value>,
    ) -> Self {
        Self {
            test: test.into(),
            success,
            message: message.into(),
            timestamp: Utc::now(),
            response_data,
        }
    }

    /// Console line: status glyph, name, message
    pub fn console_line(&self) -> String {
        let status = if self.success { "✅ PASS" } else { "❌ FAIL" };
        format!("{}: {} - {}", status, self.test, self.message)
    }
}
