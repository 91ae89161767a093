pub mod models;
pub mod services;

pub use models::{ResourceKind, ResourceRegistry, Summary, TestOutcome};
pub use services::{CaseContext, CreatedResource, Creation, Harness, TeardownReport};
