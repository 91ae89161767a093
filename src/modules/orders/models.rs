use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::modules::cart::new_session_id;
use crate::modules::catalog::models::{smartphone_price, PRODUCT_NAME};

pub const PENDING_STATUS: &str = "pending";

/// Body of POST /orders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub session_id: String,
    /// Serialized as `null` for guest orders
    pub user_id: Option<Value>,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: Value,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn new_york() -> Self {
        Self {
            name: "John Doe".to_string(),
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "USA".to_string(),
        }
    }
}

impl NewOrder {
    /// One smartphone, paid by credit card, shipped to New York
    pub fn single_item(user_id: Option<Value>, product_id: Value) -> Self {
        let items = vec![OrderItem {
            product_id,
            name: PRODUCT_NAME.to_string(),
            price: smartphone_price(),
            quantity: 1,
        }];

        Self {
            session_id: new_session_id(),
            user_id,
            total: order_total(&items),
            items,
            shipping_address: ShippingAddress::new_york(),
            payment_method: "credit_card".to_string(),
        }
    }
}

/// Sum of price x quantity over the items
pub fn order_total(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum()
}
