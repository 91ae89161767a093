use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Fresh cart session id, `test_session_<uuid>`
pub fn new_session_id() -> String {
    format!("test_session_{}", Uuid::new_v4())
}

/// Body of POST /cart/add and POST /cart/update
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub session_id: String,
    /// Product id exactly as the catalog returned it
    pub product_id: Value,
    pub quantity: u32,
}

/// Body of POST /cart/clear
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCartRequest {
    pub session_id: String,
}
