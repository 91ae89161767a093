//! Storefront API Conformance Harness Library
//!
//! Drives an e-commerce REST backend through a fixed sequence of scripted
//! cases, records an outcome per check, and tracks the resources the run
//! creates so later cases can build on them.

pub mod client;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use config::Config;
pub use crate::core::{Case, HarnessError, Result};
pub use modules::harness::{
    CaseContext, CreatedResource, Harness, ResourceKind, ResourceRegistry, Summary, TestOutcome,
};
