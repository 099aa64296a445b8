//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_transaction_list;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, Money, Transaction, TransactionDraft, TxDate, TxKind};

use super::{resolve_category, resolve_transaction};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TxCommands {
    /// Add a new transaction
    Add {
        /// Amount (e.g., "15.50" or "1000")
        amount: String,
        /// Transaction kind: income or expense
        #[arg(short, long)]
        kind: String,
        /// Category name or ID (omit for uncategorized)
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Filter by kind: income or expense
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Delete a transaction by id (or unique id prefix)
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command, returning whether the state was mutated
pub fn handle_tx_command(
    state: &mut BudgetState,
    settings: &Settings,
    cmd: TxCommands,
) -> BudgetResult<bool> {
    match cmd {
        TxCommands::Add {
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| BudgetError::Validation(e.to_string()))?;
            if amount.is_negative() {
                return Err(BudgetError::Validation(
                    "Amount must be non-negative; use --kind expense for outgoing money".into(),
                ));
            }

            let kind: TxKind = kind
                .parse()
                .map_err(BudgetError::Validation)?;

            let date = match date {
                Some(raw) => {
                    TxDate::parse(&raw).map_err(|e| BudgetError::Validation(e.to_string()))?
                }
                None => TxDate::today(),
            };

            let category_id = match category {
                Some(ident) => Some(resolve_category(state, &ident)?.id),
                None => None,
            };

            let draft = TransactionDraft::new(date, kind, category_id, amount)
                .with_note(note.unwrap_or_default());
            let id = state.add_transaction(draft);

            println!(
                "Added {} of {}: {}",
                kind,
                amount.format_with_symbol(&settings.currency_symbol),
                id
            );
            Ok(true)
        }

        TxCommands::List { limit, kind } => {
            let kind = kind
                .map(|k| k.parse::<TxKind>())
                .transpose()
                .map_err(BudgetError::Validation)?;

            let shown: Vec<&Transaction> = state
                .transactions
                .iter()
                .filter(|t| kind.map_or(true, |k| t.kind == k))
                .take(limit)
                .collect();

            print!(
                "{}",
                format_transaction_list(state, &shown, &settings.currency_symbol)
            );
            Ok(false)
        }

        TxCommands::Delete { id } => {
            let id = resolve_transaction(state, &id)?;
            state.delete_transaction(id);
            println!("Deleted transaction: {}", id);
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_add_rejects_bad_amount() {
        let mut state = BudgetState::new();
        let settings = Settings::default();

        let err = handle_tx_command(
            &mut state,
            &settings,
            TxCommands::Add {
                amount: "abc".into(),
                kind: "expense".into(),
                category: None,
                date: None,
                note: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(state.transactions.is_empty());

        let err = handle_tx_command(
            &mut state,
            &settings,
            TxCommands::Add {
                amount: "1.€".into(),
                kind: "expense".into(),
                category: None,
                date: None,
                note: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let mut state = BudgetState::new();
        let settings = Settings::default();

        let err = handle_tx_command(
            &mut state,
            &settings,
            TxCommands::Add {
                amount: "10".into(),
                kind: "expense".into(),
                category: Some("Taxi".into()),
                date: None,
                note: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_and_delete() {
        let mut state = BudgetState::new();
        state.upsert_category(Category::new("Food"));
        let settings = Settings::default();

        let mutated = handle_tx_command(
            &mut state,
            &settings,
            TxCommands::Add {
                amount: "15.50".into(),
                kind: "expense".into(),
                category: Some("food".into()),
                date: Some("2024-03-01".into()),
                note: Some("lunch".into()),
            },
        )
        .unwrap();
        assert!(mutated);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.transactions[0].amount, Money::from_cents(1550));

        let id = state.transactions[0].id.as_uuid().to_string();
        let mutated = handle_tx_command(
            &mut state,
            &settings,
            TxCommands::Delete { id },
        )
        .unwrap();
        assert!(mutated);
        assert!(state.transactions.is_empty());
    }
}
