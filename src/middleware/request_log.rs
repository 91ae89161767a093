use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use http::Extensions;
use reqwest::header::HeaderValue;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client middleware that tags every outgoing request with a request ID,
/// traces it, and counts how many requests were sent
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    sent: Arc<AtomicUsize>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests handed to the transport so far
    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Middleware for RequestLog {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            req.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        self.sent.fetch_add(1, Ordering::SeqCst);

        let method = req.method().clone();
        let url = req.url().to_string();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Outgoing request"
        );

        let started = Instant::now();
        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(res) => tracing::debug!(
                request_id = %request_id,
                status = %res.status(),
                elapsed_ms,
                "Request completed"
            ),
            Err(e) => tracing::warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                elapsed_ms,
                error = %e,
                "Request failed"
            ),
        }

        result
    }
}
