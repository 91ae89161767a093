use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::core::expect::{require_array, require_str_eq, resource_id};
use crate::core::{Case, HarnessError, Result};
use crate::modules::harness::{CaseContext, CreatedResource, ResourceKind};

use super::models::{NewOrder, PENDING_STATUS};

/// POST /orders, then GET /orders
///
/// Uses the product and user created earlier when there are any; otherwise
/// the order references a made-up product id and no user.
pub struct OrderLifecycle {
    order: NewOrder,
}

impl OrderLifecycle {
    /// Ids are sent back exactly as the server returned them
    pub fn new(user_id: Option<Value>, product_id: Option<Value>) -> Self {
        let product_id = product_id.unwrap_or_else(|| {
            let placeholder = Uuid::new_v4().to_string();
            tracing::debug!(product_id = %placeholder, "No product created; using placeholder id");
            Value::String(placeholder)
        });

        Self {
            order: NewOrder::single_item(user_id, product_id),
        }
    }
}

#[async_trait]
impl Case for OrderLifecycle {
    type Output = CreatedResource;

    fn name(&self) -> &str {
        "Order Operations"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<CreatedResource> {
        const CREATE: &str = "Create Order";
        const MISSING: &str = "Order creation response missing expected fields";

        let body = ctx
            .client()
            .post_json("orders", &self.order)
            .await?
            .expect_json(StatusCode::CREATED, CREATE, "Order creation")?;

        let id = resource_id(&body).ok_or_else(|| HarnessError::assertion(CREATE, MISSING))?;
        require_str_eq(&body, "status", PENDING_STATUS, CREATE, MISSING)?;

        ctx.register(ResourceKind::Order, id.clone());
        ctx.pass(CREATE, "Order created successfully", Some(body.clone()));

        list_orders(ctx).await?;

        Ok(CreatedResource::new(id, body))
    }
}

async fn list_orders(ctx: &mut CaseContext<'_>) -> Result<Vec<Value>> {
    const CHECK: &str = "Get Orders";
    let body = ctx
        .client()
        .get("orders")
        .await?
        .expect_json(StatusCode::OK, CHECK, "Get orders")?;

    let orders = require_array(&body, CHECK, "Orders response is not a list")?.clone();
    ctx.pass(CHECK, format!("Retrieved {} orders", orders.len()), None);
    Ok(orders)
}
