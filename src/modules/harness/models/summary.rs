use serde::Serialize;
use std::fmt::Write as _;

use super::outcome::TestOutcome;
use super::registry::{ResourceKind, ResourceRegistry};

pub const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedCheck {
    pub test: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceCount {
    pub kind: ResourceKind,
    pub count: usize,
}

/// Aggregate view of a finished run, derived only from the outcome log and the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage of passing outcomes, 0.0 when nothing was recorded
    pub success_rate: f64,
    pub failures: Vec<FailedCheck>,
    pub resources: Vec<ResourceCount>,
}

impl Summary {
    pub fn from_run(outcomes: &[TestOutcome], registry: &ResourceRegistry) -> Self {
        let passed = outcomes.iter().filter(|o| o.success).count();
        let total = outcomes.len();
        let failed = total - passed;

        let success_rate = if total == 0 {
            0.0
        } else {
            passed as f64 / total as f64 * 100.0
        };

        let failures = outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| FailedCheck {
                test: o.test.clone(),
                message: o.message.clone(),
            })
            .collect();

        let resources = registry
            .counts()
            .into_iter()
            .map(|(kind, count)| ResourceCount { kind, count })
            .collect();

        Self {
            total,
            passed,
            failed,
            success_rate,
            failures,
            resources,
        }
    }

    /// `(passed, failed)`
    pub fn totals(&self) -> (usize, usize) {
        (self.passed, self.failed)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Human-readable summary block printed at the end of a run
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "📊 TEST SUMMARY");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Total Tests: {}", self.total);
        let _ = writeln!(out, "✅ Passed: {}", self.passed);
        let _ = writeln!(out, "❌ Failed: {}", self.failed);
        let _ = writeln!(out, "Success Rate: {:.1}%", self.success_rate);

        if !self.failures.is_empty() {
            let _ = writeln!(out, "\n🔍 FAILED TESTS:");
            for failure in &self.failures {
                let _ = writeln!(out, "  • {}: {}", failure.test, failure.message);
            }
        }

        let _ = writeln!(out, "\n📋 CREATED RESOURCES:");
        for resource in &self.resources {
            let _ = writeln!(out, "  • {}: {} created", resource.kind, resource.count);
        }

        out
    }
}
