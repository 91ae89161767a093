use async_trait::async_trait;
use reqwest::StatusCode;

use crate::core::{Case, Result};
use crate::modules::harness::CaseContext;
use crate::modules::users::Credentials;

/// Requests the API must reject: an unknown route, an unknown product, bad credentials.
///
/// Each check is recorded on its own; one failing does not skip the others.
pub struct ErrorPaths;

#[async_trait]
impl Case for ErrorPaths {
    type Output = ();

    fn name(&self) -> &str {
        "Error Handling"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<()> {
        const UNKNOWN_ENDPOINT: &str = "Invalid Endpoint Error";
        let response = ctx.client().get("invalid-endpoint").await?;
        let checked = response.expect_rejection(StatusCode::NOT_FOUND, UNKNOWN_ENDPOINT);
        if ctx.settle(checked)?.is_some() {
            ctx.pass(
                UNKNOWN_ENDPOINT,
                "404 error properly returned for invalid endpoint",
                None,
            );
        }

        const UNKNOWN_PRODUCT: &str = "Invalid Product ID Error";
        let response = ctx.client().get("products/invalid-id").await?;
        let checked = response.expect_rejection(StatusCode::NOT_FOUND, UNKNOWN_PRODUCT);
        if ctx.settle(checked)?.is_some() {
            ctx.pass(
                UNKNOWN_PRODUCT,
                "404 error properly returned for invalid product ID",
                None,
            );
        }

        const BAD_LOGIN: &str = "Invalid Login Error";
        let response = ctx
            .client()
            .post_json("users/login", &Credentials::unknown())
            .await?;
        let checked = response.expect_rejection(StatusCode::UNAUTHORIZED, BAD_LOGIN);
        if ctx.settle(checked)?.is_some() {
            ctx.pass(
                BAD_LOGIN,
                "401 error properly returned for invalid credentials",
                None,
            );
        }

        Ok(())
    }
}
