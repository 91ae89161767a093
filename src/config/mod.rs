use crate::core::{HarnessError, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BRAND_MARKER: &str = "Bad-Wolf®";

/// Main harness configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub target: TargetConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub report_path: Option<PathBuf>,
    pub teardown: bool,
}

/// The API under test
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub brand_marker: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl TargetConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            brand_marker: DEFAULT_BRAND_MARKER.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_brand_marker(mut self, marker: impl Into<String>) -> Self {
        self.brand_marker = marker.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            report_path: None,
            teardown: false,
        }
    }
}

impl Config {
    /// Configuration for a given base URL with every other setting at its default
    pub fn for_target(base_url: impl Into<String>) -> Self {
        Self {
            app: AppConfig::default(),
            target: TargetConfig::new(base_url),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = env::var("CONFORMANCE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| HarnessError::configuration("Invalid CONFORMANCE_TIMEOUT_SECS"))?;

        let teardown = match env::var("CONFORMANCE_TEARDOWN") {
            Ok(value) => parse_flag(&value)
                .ok_or_else(|| HarnessError::configuration("Invalid CONFORMANCE_TEARDOWN"))?,
            Err(_) => false,
        };

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(HarnessError::configuration(format!(
                    "Invalid LOG_FORMAT '{}' (expected 'pretty' or 'json')",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
                log_format,
                report_path: env::var("CONFORMANCE_REPORT_PATH")
                    .ok()
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from),
                teardown,
            },
            target: TargetConfig::new(
                env::var("CONFORMANCE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            )
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_brand_marker(
                env::var("CONFORMANCE_BRAND_MARKER")
                    .unwrap_or_else(|_| DEFAULT_BRAND_MARKER.to_string()),
            ),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = &self.target.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HarnessError::configuration(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        if self.target.timeout.is_zero() {
            return Err(HarnessError::configuration(
                "Request timeout must be greater than 0",
            ));
        }

        if self.target.brand_marker.trim().is_empty() {
            return Err(HarnessError::configuration("Brand marker must not be empty"));
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
