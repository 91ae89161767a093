// Test Helper Modules
//
// Shared infrastructure for the integration tests: a stub storefront API
// served over real HTTP, and a capturable output sink for the harness.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Example:
//   #[actix_web::test]
//   async fn test_root() {
//       let stub = spawn_stub_backend(StubBehavior::conforming());
//       let mut harness = harness_for(&stub);
//       assert!(harness.run_case(&RootEndpoint).await.is_some());
//   }

#![allow(dead_code)]

pub mod output;

pub use output::*;
pub use stub_backend::*;

use storefront_conformance::Harness;

/// Harness pointed at `stub`, with its report discarded
pub fn harness_for(stub: &StubBackend) -> Harness {
    Harness::with_writer(&stub.config(), std::io::sink()).expect("Failed to build harness")
}

/// Harness pointed at `stub`, reporting into a buffer the test can read
pub fn captured_harness_for(stub: &StubBackend) -> (Harness, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let harness =
        Harness::with_writer(&stub.config(), buffer.clone()).expect("Failed to build harness");
    (harness, buffer)
}
