use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::core::expect::require_field;
use crate::core::{Case, HarnessError, Result};
use crate::modules::harness::{CaseContext, CreatedResource, Creation, ResourceKind};

use super::models::NewUser;

/// Register, log in with the same credentials, then re-register the same email
///
/// The duplicate registration is checked whether or not the first two steps
/// passed. Output is the registered user, if registration passed.
pub struct UserAccount {
    user: NewUser,
}

impl UserAccount {
    pub fn new(user: NewUser) -> Self {
        Self { user }
    }
}

#[async_trait]
impl Case for UserAccount {
    type Output = Option<CreatedResource>;

    fn name(&self) -> &str {
        "User Registration/Login"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Option<CreatedResource>> {
        let creation = Creation {
            check: "User Registration",
            kind: ResourceKind::User,
            path: "users/register",
            action: "Registration",
            echo_field: "email",
            echo_value: &self.user.email,
            success_message: "User registered successfully",
        };
        let registered = ctx.create(creation, &self.user).await;
        let registered = ctx.settle(registered)?;

        if registered.is_some() {
            let login = login(ctx, &self.user).await;
            ctx.settle(login)?;
        }

        let duplicate = duplicate_registration(ctx, &self.user).await;
        ctx.settle(duplicate)?;

        Ok(registered)
    }
}

async fn login(ctx: &mut CaseContext<'_>, user: &NewUser) -> Result<Value> {
    const CHECK: &str = "User Login";
    const MISSING: &str = "Login response missing expected fields";

    let body = ctx
        .client()
        .post_json("users/login", &user.credentials())
        .await?
        .expect_json(StatusCode::OK, CHECK, "Login")?;

    require_field(&body, "user", CHECK, MISSING)?;
    let token = require_field(&body, "token", CHECK, MISSING)?;
    if token.is_null() {
        return Err(HarnessError::assertion(CHECK, MISSING));
    }

    ctx.pass(CHECK, "User login successful", Some(body.clone()));
    Ok(body)
}

async fn duplicate_registration(ctx: &mut CaseContext<'_>, user: &NewUser) -> Result<()> {
    const CHECK: &str = "Duplicate Email Registration";

    let response = ctx.client().post_json("users/register", user).await?;
    if response.status() != StatusCode::BAD_REQUEST {
        return Err(HarnessError::assertion(
            CHECK,
            format!(
                "Duplicate email not properly handled (status {})",
                response.status().as_u16()
            ),
        ));
    }

    ctx.pass(CHECK, "Duplicate email properly rejected", None);
    Ok(())
}
