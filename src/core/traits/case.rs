use async_trait::async_trait;

use crate::core::Result;
use crate::modules::harness::services::CaseContext;

/// One scripted unit of a conformance run
///
/// A case issues one or more requests through the context, records an outcome
/// for every check it completes, and hands back whatever later cases need.
/// Errors returned from `execute` are recorded by the harness as a single
/// failing outcome; they never stop the run.
#[async_trait]
pub trait Case: Send + Sync {
    /// Value handed to later cases (e.g. a created product)
    type Output: Send;

    /// Outcome name used when the case fails as a whole
    fn name(&self) -> &str;

    /// Run the case's requests and checks
    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Self::Output>;
}
