use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::Instrument;

use crate::client::ApiClient;
use crate::config::{Config, TargetConfig};
use crate::core::{Case, HarnessError, Result};
use crate::modules::cart::CartLifecycle;
use crate::modules::catalog::{
    CreateCategory, CreateProduct, ListCategories, ListProducts, NewCategory, NewProduct,
    CATEGORY_NAME, SEARCH_TERM,
};
use crate::modules::error_paths::ErrorPaths;
use crate::modules::harness::models::summary::RULE_WIDTH;
use crate::modules::harness::models::{ResourceRegistry, Summary, TestOutcome};
use crate::modules::health::RootEndpoint;
use crate::modules::orders::OrderLifecycle;
use crate::modules::users::{NewUser, UserAccount};

use super::context::CaseContext;
use super::journal::Journal;
use super::report::RunReport;
use super::teardown::{delete_created_resources, TeardownReport};

/// Owns everything one conformance run needs: the client, the outcome log and
/// the registry of created resources
pub struct Harness {
    client: ApiClient,
    journal: Journal,
    registry: ResourceRegistry,
    target: TargetConfig,
    teardown_enabled: bool,
}

impl Harness {
    /// Harness reporting to stdout
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_writer(config, std::io::stdout())
    }

    /// Harness reporting to `out`
    pub fn with_writer(config: &Config, out: impl Write + Send + Sync + 'static) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(&config.target)?,
            journal: Journal::new(Box::new(out)),
            registry: ResourceRegistry::new(),
            target: config.target.clone(),
            teardown_enabled: config.app.teardown,
        })
    }

    pub fn record(
        &mut self,
        test: impl Into<String>,
        success: bool,
        message: impl Into<String>,
        response_data: Option<Value>,
    ) {
        self.journal.record(test, success, message, response_data);
    }

    /// Run one case; any error it returns becomes a single failing outcome.
    ///
    /// Returns `None` when the case failed at its boundary.
    pub async fn run_case<C: Case>(&mut self, case: &C) -> Option<C::Output> {
        let name = case.name().to_string();
        let span = tracing::info_span!("case", name = %name);

        let result = {
            let mut ctx = CaseContext {
                client: &self.client,
                journal: &mut self.journal,
                registry: &mut self.registry,
                brand_marker: &self.target.brand_marker,
            };
            case.execute(&mut ctx).instrument(span).await
        };

        match result {
            Ok(output) => Some(output),
            Err(err) => {
                self.record_case_failure(&name, err);
                None
            }
        }
    }

    fn record_case_failure(&mut self, case_name: &str, err: HarnessError) {
        match err {
            HarnessError::Assertion { check, message } => {
                self.journal.record(check, false, message, None);
            }
            HarnessError::Precondition(message) => {
                tracing::info!(case = %case_name, reason = %message, "Case skipped");
                self.journal.record(case_name, false, message, None);
            }
            other => {
                tracing::warn!(case = %case_name, error = %other, "Case aborted");
                self.journal
                    .record(case_name, false, format!("{} error: {}", case_name, other), None);
            }
        }
    }

    /// Run the fixed case sequence, print the summary and return it
    pub async fn run_all(&mut self) -> Summary {
        tracing::info!(base_url = %self.target.base_url, "Starting conformance run");

        self.journal.line(&format!(
            "🚀 Starting {} E-commerce API Backend Tests ({})",
            self.target.brand_marker, self.target.base_url
        ));
        self.journal.line(&"=".repeat(RULE_WIDTH));

        self.run_case(&RootEndpoint).await;
        self.run_case(&CreateCategory::new(NewCategory::electronics())).await;
        self.run_case(&ListCategories).await;

        let product = self.run_case(&CreateProduct::new(NewProduct::smartphone())).await;
        self.run_case(&ListProducts::new(CATEGORY_NAME, SEARCH_TERM)).await;

        let product_id = product.map(|p| p.raw_id);
        self.run_case(&CartLifecycle::new(product_id.clone())).await;

        let user = self
            .run_case(&UserAccount::new(NewUser::generate()))
            .await
            .flatten();

        self.run_case(&OrderLifecycle::new(user.map(|u| u.raw_id), product_id)).await;
        self.run_case(&ErrorPaths).await;

        let summary = self.summary();
        self.journal.line(&summary.render());

        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            "Conformance run finished"
        );

        if self.teardown_enabled {
            self.teardown().await;
        }

        summary
    }

    /// Delete every created product and order. The registry is left untouched.
    pub async fn teardown(&self) -> TeardownReport {
        delete_created_resources(&self.client, &self.registry).await
    }

    pub fn summary(&self) -> Summary {
        Summary::from_run(self.journal.outcomes(), &self.registry)
    }

    /// Write the JSON report for the run so far
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let report = RunReport::new(
            &self.target.base_url,
            self.summary(),
            self.journal.outcomes(),
            &self.registry,
        );
        report.write_to(path)
    }

    pub fn outcomes(&self) -> &[TestOutcome] {
        self.journal.outcomes()
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Requests issued so far
    pub fn requests_sent(&self) -> usize {
        self.client.requests_sent()
    }
}
