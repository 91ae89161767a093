//! Shape checks over JSON response bodies.
//!
//! Each check names the outcome it belongs to so a mismatch can be recorded
//! under that name at the case boundary.

use serde_json::Value;

use super::error::{HarnessError, Result};

/// Require `field` to be present on a JSON object
pub fn require_field<'a>(body: &'a Value, field: &str, check: &str, message: &str) -> Result<&'a Value> {
    body.get(field)
        .ok_or_else(|| HarnessError::assertion(check, message))
}

/// Require the value to be a JSON array
pub fn require_array<'a>(value: &'a Value, check: &str, message: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| HarnessError::assertion(check, message))
}

/// Require `field` to be a string equal to `expected`
pub fn require_str_eq(body: &Value, field: &str, expected: &str, check: &str, message: &str) -> Result<()> {
    match body.get(field).and_then(Value::as_str) {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(HarnessError::assertion(check, message)),
    }
}

/// Identifier assigned by the server, normalized to a string.
///
/// Backends hand out either string ids (uuids) or numeric ids.
pub fn resource_id(body: &Value) -> Option<String> {
    match body.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Length of the `items` array on a cart body, if it has one
pub fn cart_items(body: &Value) -> Option<usize> {
    body.get("items").and_then(Value::as_array).map(Vec::len)
}
