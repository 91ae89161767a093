use std::process::ExitCode;

use storefront_conformance::config::{Config, LogFormat};
use storefront_conformance::Harness;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status when the harness could not run or could not write its report
const SETUP_FAILURE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::from_env().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(SETUP_FAILURE);
        }
    };

    init_tracing(&config);

    match run(&config).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::from(SETUP_FAILURE)
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<u8> {
    use anyhow::Context;

    let mut harness = Harness::new(config).context("Failed to initialize harness")?;
    let summary = harness.run_all().await;

    if let Some(path) = &config.app.report_path {
        harness
            .write_report(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    Ok(summary.exit_code())
}

// Logs go to stderr; stdout carries the report
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("storefront_conformance={}", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
