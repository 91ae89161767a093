// Property-based tests for run summaries: totals always reconcile with the
// outcome log, and the success rate stays a percentage.

use proptest::prelude::*;
use storefront_conformance::{ResourceKind, ResourceRegistry, Summary, TestOutcome};

fn outcomes_from(results: &[bool]) -> Vec<TestOutcome> {
    results
        .iter()
        .enumerate()
        .map(|(i, success)| TestOutcome::new(format!("Check {}", i), *success, "done", None))
        .collect()
}

/// Empty run reports a zero success rate rather than dividing by zero
#[test]
fn test_empty_run() {
    let summary = Summary::from_run(&[], &ResourceRegistry::new());

    assert_eq!(summary.totals(), (0, 0));
    assert_eq!(summary.success_rate, 0.0);
    assert_eq!(summary.exit_code(), 0);
    assert!(summary.render().contains("Success Rate: 0.0%"));
}

/// Failures are listed in the order they were recorded
#[test]
fn test_failures_keep_recording_order() {
    let outcomes = vec![
        TestOutcome::new("Create Product", false, "Product creation failed with status 500", None),
        TestOutcome::new("Get Categories", true, "Retrieved 1 categories", None),
        TestOutcome::new("Cart Operations", false, "No products available for cart testing", None),
    ];
    let mut registry = ResourceRegistry::new();
    registry.register(ResourceKind::Category, "c-1");

    let summary = Summary::from_run(&outcomes, &registry);
    let rendered = summary.render();

    let product = rendered.find("  • Create Product:").expect("product failure listed");
    let cart = rendered.find("  • Cart Operations:").expect("cart failure listed");
    assert!(product < cart);
    assert!(rendered.contains("Success Rate: 33.3%"));
    assert!(rendered.contains("  • categories: 1 created"));
    assert_eq!(summary.exit_code(), 1);
}

proptest! {
    /// passed + failed == total, and the rate matches the ratio
    #[test]
    fn prop_totals_reconcile(results in prop::collection::vec(any::<bool>(), 0..60)) {
        let outcomes = outcomes_from(&results);
        let summary = Summary::from_run(&outcomes, &ResourceRegistry::new());

        let expected_passed = results.iter().filter(|r| **r).count();
        prop_assert_eq!(summary.total, results.len());
        prop_assert_eq!(summary.passed, expected_passed);
        prop_assert_eq!(summary.passed + summary.failed, summary.total);
        prop_assert_eq!(summary.failures.len(), summary.failed);
        prop_assert!((0.0..=100.0).contains(&summary.success_rate));
        prop_assert_eq!(summary.all_passed(), summary.failed == 0);
    }

    /// Exit status is 0 exactly when nothing failed
    #[test]
    fn prop_exit_code_tracks_failures(results in prop::collection::vec(any::<bool>(), 1..30)) {
        let summary = Summary::from_run(&outcomes_from(&results), &ResourceRegistry::new());
        let expected = if results.iter().all(|r| *r) { 0 } else { 1 };
        prop_assert_eq!(summary.exit_code(), expected);
    }
}
