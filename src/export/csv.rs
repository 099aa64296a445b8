//! CSV export
//!
//! Writes the five-column interchange format. Fields are written without
//! quoting and rows use `\n` line endings; a note containing a comma will
//! shift columns on re-import, matching the interchange contract.

use crate::models::{BudgetState, Transaction};

/// Export all transactions as CSV text
///
/// One row per transaction, sorted by date descending. Category references
/// are resolved to display names; uncategorized and dangling references
/// produce an empty category field. Amounts are plain decimal strings.
pub fn export_csv(state: &BudgetState) -> String {
    let mut sorted: Vec<&Transaction> = state.transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::from("date,type,category,amount,note\n");
    for tx in sorted {
        let category = state.category_name(tx.category_id).unwrap_or("");
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            tx.date,
            tx.kind,
            category,
            tx.amount.to_decimal_string(),
            tx.note
        ));
    }
    out
}
