//! JSON export
//!
//! Pretty-prints the full `BudgetState` document, the same shape as the
//! persisted blob and the JSON import format.

use crate::error::BudgetResult;
use crate::models::BudgetState;

/// Export the full state as pretty-printed JSON
pub fn export_json(state: &BudgetState) -> BudgetResult<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Default export filename for the given extension (`budget_YYYY-MM-DD.csv`)
pub fn default_export_filename(extension: &str) -> String {
    format!(
        "budget_{}.{}",
        chrono::Local::now().format("%Y-%m-%d"),
        extension
    )
}
