use serde_json::Value;
use std::io::Write;

use crate::modules::harness::models::TestOutcome;

/// Ordered outcome log plus the stream the run reports to
pub struct Journal {
    outcomes: Vec<TestOutcome>,
    out: Box<dyn Write + Send + Sync>,
}

impl Journal {
    pub fn new(out: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            outcomes: Vec::new(),
            out,
        }
    }

    /// Append an outcome and print its console line
    pub fn record(
        &mut self,
        test: impl Into<String>,
        success: bool,
        message: impl Into<String>,
        response_data: Option<Value>,
    ) {
        let outcome = TestOutcome::new(test, success, message, response_data);

        tracing::debug!(
            test = %outcome.test,
            success = outcome.success,
            "Recorded outcome"
        );

        let line = outcome.console_line();
        self.outcomes.push(outcome);
        self.line(&line);
    }

    /// Write a raw line to the report stream. Write errors are logged, not raised.
    pub fn line(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to report output");
        }
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }
}
