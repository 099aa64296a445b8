//! Bootstrap document fetch
//!
//! One blocking HTTP GET of a default-state JSON document, consulted only on
//! first run when no local blob exists. No timeouts beyond the client
//! defaults, no retries; any failure falls through to the caller's default.

use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetState;

/// Fetch and parse the bootstrap document
pub fn fetch_bootstrap(url: &str) -> BudgetResult<BudgetState> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| BudgetError::Network(format!("bootstrap fetch failed: {}", e)))?;

    let body = response
        .into_string()
        .map_err(|e| BudgetError::Network(format!("failed to read bootstrap response: {}", e)))?;

    serde_json::from_str(&body)
        .map_err(|e| BudgetError::Network(format!("malformed bootstrap document: {}", e)))
}
