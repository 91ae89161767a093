pub mod context;
pub mod journal;
pub mod report;
pub mod runner;
pub mod teardown;

pub use context::{CaseContext, CreatedResource, Creation};
pub use journal::Journal;
pub use report::RunReport;
pub use runner::Harness;
pub use teardown::{delete_created_resources, TeardownReport};
