use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::Result;
use crate::modules::harness::models::{ResourceRegistry, Summary, TestOutcome};

/// Machine-readable record of a run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub base_url: &'a str,
    pub summary: Summary,
    pub outcomes: &'a [TestOutcome],
    pub resources: &'a ResourceRegistry,
}

impl<'a> RunReport<'a> {
    pub fn new(
        base_url: &'a str,
        summary: Summary,
        outcomes: &'a [TestOutcome],
        resources: &'a ResourceRegistry,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            base_url,
            summary,
            outcomes,
            resources,
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        tracing::info!(path = %path.display(), "Wrote JSON report");
        Ok(())
    }
}
