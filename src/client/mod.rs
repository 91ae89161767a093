//! HTTP client for the storefront API under test.

pub mod response;

pub use response::ApiResponse;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::Serialize;

use crate::config::TargetConfig;
use crate::core::{HarnessError, Result};
use crate::middleware::RequestLog;

/// Client bound to one API base URL
///
/// Every request goes through [`RequestLog`], carries the configured timeout,
/// and is awaited to completion before the next one is issued.
pub struct ApiClient {
    client: ClientWithMiddleware,
    base_url: String,
    request_log: RequestLog,
}

impl ApiClient {
    pub fn new(target: &TargetConfig) -> Result<Self> {
        let inner = Client::builder()
            .timeout(target.timeout)
            .build()
            .map_err(|e| HarnessError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        let request_log = RequestLog::new();
        let client = ClientBuilder::new(inner).with(request_log.clone()).build();

        Ok(Self {
            client,
            base_url: target.base_url.clone(),
            request_log,
        })
    }

    /// Absolute URL for a path relative to the base URL; `""` is the base itself
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Number of requests sent through this client
    pub fn requests_sent(&self) -> usize {
        self.request_log.sent()
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(self.client.get(self.url(path))).await
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send(self.client.delete(self.url(path))).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse::new(status, body))
    }
}
