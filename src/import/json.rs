//! JSON import (whole-state replace)
//!
//! Validates a candidate document and deserializes it into a full
//! `BudgetState`. On success the caller replaces the entire state outright;
//! there is no merge path for JSON.

use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;

/// Parse a JSON document into a replacement state
///
/// The document must be valid JSON, must carry both a `categories` and a
/// `transactions` key with non-null values, and must deserialize into
/// `BudgetState`. Any failure is an `ImportFormat` error and the caller's
/// state stays untouched.
pub fn parse_state_json(text: &str) -> BudgetResult<BudgetState> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| BudgetError::ImportFormat(format!("not valid JSON: {}", e)))?;

    let obj = value
        .as_object()
        .ok_or_else(|| BudgetError::ImportFormat("expected a JSON object".into()))?;

    for key in ["categories", "transactions"] {
        match obj.get(key) {
            None | Some(Value::Null) => {
                return Err(BudgetError::ImportFormat(format!("missing '{}' field", key)));
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value)
        .map_err(|e| BudgetError::ImportFormat(format!("malformed budget document: {}", e)))
}
