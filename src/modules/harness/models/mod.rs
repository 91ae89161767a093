pub mod outcome;
pub mod registry;
pub mod summary;

pub use outcome::TestOutcome;
pub use registry::{ResourceKind, ResourceRegistry};
pub use summary::{FailedCheck, ResourceCount, Summary};
