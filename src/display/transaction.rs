//! Transaction display formatting

use crate::models::{BudgetState, Transaction};

/// Placeholder for a transaction with no category
pub const NO_CATEGORY: &str = "(none)";
/// Placeholder for a dangling category reference
pub const UNKNOWN_CATEGORY: &str = "(unknown)";

/// Resolve a transaction's category to a display label
pub fn category_label<'a>(state: &'a BudgetState, tx: &Transaction) -> &'a str {
    match tx.category_id {
        None => NO_CATEGORY,
        Some(_) => state.category_name(tx.category_id).unwrap_or(UNKNOWN_CATEGORY),
    }
}

/// Format a list of transactions as an aligned table
pub fn format_transaction_list(
    state: &BudgetState,
    transactions: &[&Transaction],
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let cat_width = transactions
        .iter()
        .map(|t| category_label(state, t).len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<7}  {:<cat_width$}  {:>12}  NOTE\n",
        "ID",
        "DATE",
        "TYPE",
        "CATEGORY",
        "AMOUNT",
        cat_width = cat_width
    ));

    for tx in transactions {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<7}  {:<cat_width$}  {:>12}  {}\n",
            tx.id.to_string(),
            tx.date.to_string(),
            tx.kind.to_string(),
            category_label(state, tx),
            tx.amount.format_with_symbol(currency_symbol),
            tx.note,
            cat_width = cat_width
        ));
    }

    output
}
