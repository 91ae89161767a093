use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::core::{Case, HarnessError, Result};
use crate::modules::harness::CaseContext;

const CHECK: &str = "Root Endpoint";

/// GET / - the API answers and identifies itself with the brand marker
pub struct RootEndpoint;

#[async_trait]
impl Case for RootEndpoint {
    type Output = Value;

    fn name(&self) -> &str {
        CHECK
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Value> {
        let response = ctx.client().get("").await?;
        if response.status() != StatusCode::OK {
            return Err(HarnessError::assertion(
                CHECK,
                format!("Root endpoint returned status {}", response.status().as_u16()),
            ));
        }

        let body = response.json()?;
        let branded = body
            .get("message")
            .and_then(Value::as_str)
            .is_some_and(|message| message.contains(ctx.brand_marker()));

        if !branded {
            return Err(HarnessError::assertion(
                CHECK,
                "Root endpoint response missing expected content",
            ));
        }

        ctx.pass(CHECK, "Root endpoint working correctly", Some(body.clone()));
        Ok(body)
    }
}
