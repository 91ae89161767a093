use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::core::expect::cart_items;
use crate::core::{Case, HarnessError, Result};
use crate::modules::harness::CaseContext;

use super::models::{new_session_id, CartItemRequest, ClearCartRequest};

const ADD_QUANTITY: u32 = 2;
const UPDATED_QUANTITY: u32 = 3;

/// add -> get -> update -> clear on a fresh session
///
/// Needs a product created earlier in the run; without one the case fails
/// before sending anything.
pub struct CartLifecycle {
    product_id: Option<Value>,
    session_id: String,
}

impl CartLifecycle {
    pub fn new(product_id: Option<Value>) -> Self {
        Self {
            product_id,
            session_id: new_session_id(),
        }
    }
}

#[async_trait]
impl Case for CartLifecycle {
    type Output = Value;

    fn name(&self) -> &str {
        "Cart Operations"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Value> {
        let product_id = self
            .product_id
            .as_ref()
            .ok_or_else(|| HarnessError::precondition("No products available for cart testing"))?;

        let item = |quantity| CartItemRequest {
            session_id: self.session_id.clone(),
            product_id: product_id.clone(),
            quantity,
        };

        add_to_cart(ctx, &item(ADD_QUANTITY)).await?;
        get_cart(ctx, &self.session_id).await?;
        update_cart(ctx, &item(UPDATED_QUANTITY)).await?;
        clear_cart(ctx, "Clear Cart", &self.session_id).await
    }
}

/// POST /cart/clear on its own; an already-empty cart must clear too
pub struct ClearCart {
    session_id: String,
}

impl ClearCart {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

#[async_trait]
impl Case for ClearCart {
    type Output = Value;

    fn name(&self) -> &str {
        "Clear Cart"
    }

    async fn execute(&self, ctx: &mut CaseContext<'_>) -> Result<Value> {
        clear_cart(ctx, self.name(), &self.session_id).await
    }
}

fn missing_items(check: &str) -> HarnessError {
    HarnessError::assertion(check, "Cart response missing items")
}

async fn add_to_cart(ctx: &mut CaseContext<'_>, request: &CartItemRequest) -> Result<Value> {
    const CHECK: &str = "Add to Cart";
    let cart = ctx
        .client()
        .post_json("cart/add", request)
        .await?
        .expect_json(StatusCode::OK, CHECK, "Add to cart")?;

    match cart_items(&cart) {
        Some(count) if count > 0 => {
            ctx.pass(CHECK, "Item added to cart successfully", Some(cart.clone()));
            Ok(cart)
        }
        _ => Err(missing_items(CHECK)),
    }
}

async fn get_cart(ctx: &mut CaseContext<'_>, session_id: &str) -> Result<Value> {
    const CHECK: &str = "Get Cart";
    let cart = ctx
        .client()
        .get_with_query("cart", &[("sessionId", session_id)])
        .await?
        .expect_json(StatusCode::OK, CHECK, "Get cart")?;

    let count = cart_items(&cart).ok_or_else(|| missing_items(CHECK))?;
    ctx.pass(CHECK, format!("Retrieved cart with {} items", count), None);
    Ok(cart)
}

async fn update_cart(ctx: &mut CaseContext<'_>, request: &CartItemRequest) -> Result<Value> {
    const CHECK: &str = "Update Cart";
    let cart = ctx
        .client()
        .post_json("cart/update", request)
        .await?
        .expect_json(StatusCode::OK, CHECK, "Update cart")?;

    cart_items(&cart).ok_or_else(|| missing_items(CHECK))?;
    ctx.pass(CHECK, "Cart updated successfully", None);
    Ok(cart)
}

async fn clear_cart(ctx: &mut CaseContext<'_>, check: &str, session_id: &str) -> Result<Value> {
    let request = ClearCartRequest {
        session_id: session_id.to_string(),
    };
    let cart = ctx
        .client()
        .post_json("cart/clear", &request)
        .await?
        .expect_json(StatusCode::OK, check, "Clear cart")?;

    match cart_items(&cart) {
        Some(0) => {
            ctx.pass(check, "Cart cleared successfully", None);
            Ok(cart)
        }
        Some(_) => Err(HarnessError::assertion(check, "Cart not properly cleared")),
        None => Err(missing_items(check)),
    }
}
