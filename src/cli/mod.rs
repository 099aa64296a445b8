//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging clap
//! argument parsing with the state operations. Handlers return whether they
//! mutated the state; persistence of accepted mutations happens once, in
//! main.

pub mod category;
pub mod export;
pub mod import;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use import::{handle_import_command, ImportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_tx_command, TxCommands};

use std::str::FromStr;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Category, TransactionId};

/// Resolve a category argument by name (case-insensitive) or id
pub fn resolve_category(state: &BudgetState, ident: &str) -> BudgetResult<Category> {
    if let Some(cat) = state.category_by_name(ident) {
        return Ok(cat.clone());
    }
    if let Ok(id) = ident.parse() {
        if let Some(cat) = state.category_by_id(id) {
            return Ok(cat.clone());
        }
    }
    Err(BudgetError::category_not_found(ident))
}

/// Resolve a transaction argument by full UUID or unique id prefix
pub fn resolve_transaction(state: &BudgetState, ident: &str) -> BudgetResult<TransactionId> {
    if let Ok(id) = TransactionId::from_str(ident) {
        if state.transactions.iter().any(|t| t.id == id) {
            return Ok(id);
        }
    }

    // Fall back to prefix matching against the hex form, as shown in listings
    let needle = ident.strip_prefix("txn-").unwrap_or(ident).to_lowercase();
    if needle.is_empty() {
        return Err(BudgetError::transaction_not_found(ident));
    }

    let matches: Vec<TransactionId> = state
        .transactions
        .iter()
        .filter(|t| t.id.as_uuid().to_string().starts_with(&needle))
        .map(|t| t.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(BudgetError::transaction_not_found(ident)),
        _ => Err(BudgetError::Validation(format!(
            "Ambiguous transaction id prefix: {}",
            ident
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft, TxDate, TxKind};

    #[test]
    fn test_resolve_category_by_name() {
        let mut state = BudgetState::new();
        state.upsert_category(Category::new("Food"));

        let cat = resolve_category(&state, "food").unwrap();
        assert_eq!(cat.name, "Food");

        assert!(resolve_category(&state, "Taxi").unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_category_by_id() {
        let mut state = BudgetState::new();
        let cat = Category::new("Food");
        state.upsert_category(cat.clone());

        let found = resolve_category(&state, &cat.id.as_uuid().to_string()).unwrap();
        assert_eq!(found.id, cat.id);
    }

    #[test]
    fn test_resolve_transaction_by_prefix() {
        let mut state = BudgetState::new();
        let id = state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-01-01").unwrap(),
            TxKind::Expense,
            None,
            Money::from_cents(100),
        ));

        let prefix = &id.as_uuid().to_string()[..8];
        assert_eq!(resolve_transaction(&state, prefix).unwrap(), id);
        assert_eq!(
            resolve_transaction(&state, &format!("txn-{}", prefix)).unwrap(),
            id
        );
        assert!(resolve_transaction(&state, "ffffffff").is_err());
    }
}
