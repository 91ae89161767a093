// Root reachability check
//
// GET /api passes only with a 200 whose message carries the brand marker.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use std::time::Duration;
use storefront_conformance::config::Config;
use storefront_conformance::modules::catalog::ListCategories;
use storefront_conformance::modules::health::RootEndpoint;
use storefront_conformance::Harness;

#[actix_web::test]
async fn test_root_passes_with_brand_marker() {
    let stub = spawn_stub_backend(StubBehavior::conforming());
    let (mut harness, output) = captured_harness_for(&stub);

    let body = harness.run_case(&RootEndpoint).await;

    assert!(body.is_some());
    let outcomes = harness.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].test, "Root Endpoint");
    assert!(outcomes[0].success);
    assert_eq!(
        outcomes[0].response_data.as_ref().unwrap()["message"],
        BRANDED_MESSAGE
    );
    assert!(output
        .contents()
        .contains("✅ PASS: Root Endpoint - Root endpoint working correctly"));
}

#[actix_web::test]
async fn test_root_fails_without_brand_marker() {
    let stub = spawn_stub_backend(StubBehavior::unbranded());
    let (mut harness, output) = captured_harness_for(&stub);

    assert!(harness.run_case(&RootEndpoint).await.is_none());

    let outcomes = harness.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].success);
    assert_eq!(
        outcomes[0].message,
        "Root endpoint response missing expected content"
    );
    assert!(output.contents().starts_with("❌ FAIL: Root Endpoint"));
}

#[actix_web::test]
async fn test_root_honors_configured_marker() {
    let stub = spawn_stub_backend(StubBehavior::unbranded());
    let mut config = stub.config();
    config.target.brand_marker = "E-commerce".to_string();

    let mut harness = Harness::with_writer(&config, std::io::sink()).unwrap();
    harness.run_case(&RootEndpoint).await;

    assert!(harness.outcomes()[0].success);
}

#[actix_web::test]
async fn test_unreachable_server_is_recorded_not_raised() {
    let mut config = Config::for_target("http://127.0.0.1:1/api");
    config.target.timeout = Duration::from_secs(2);
    let mut harness = Harness::with_writer(&config, std::io::sink()).unwrap();

    assert!(harness.run_case(&RootEndpoint).await.is_none());

    let outcomes = harness.outcomes();
    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].test, "Root Endpoint");
    assert!(
        outcomes[0].message.starts_with("Root Endpoint error:"),
        "unexpected message: {}",
        outcomes[0].message
    );
    assert_eq!(harness.requests_sent(), 1);
}

#[actix_web::test]
async fn test_malformed_body_fails_case_and_run_continues() {
    let stub = spawn_stub_backend(StubBehavior::malformed_root());
    let mut harness = harness_for(&stub);

    assert!(harness.run_case(&RootEndpoint).await.is_none());
    let categories = harness.run_case(&ListCategories).await;

    let outcomes = harness.outcomes();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].test, "Root Endpoint");
    assert!(!outcomes[0].success);
    assert!(
        outcomes[0].message.starts_with("Root Endpoint error: JSON error:"),
        "unexpected message: {}",
        outcomes[0].message
    );
    assert!(categories.is_some());
    assert!(outcomes[1].success);
}

#[actix_web::test]
async fn test_malformed_root_fails_only_root_in_full_run() {
    let stub = spawn_stub_backend(StubBehavior::malformed_root());
    let mut harness = harness_for(&stub);

    let summary = harness.run_all().await;

    assert_eq!(summary.totals(), (18, 1));
    assert_eq!(summary.failures[0].test, "Root Endpoint");
    assert_eq!(summary.exit_code(), 1);
}
