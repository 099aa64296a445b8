//! Core data models for budgetbook
//!
//! This module contains the data structures that represent the budgeting
//! domain: categories, transactions, and the BudgetState root aggregate.

pub mod category;
pub mod date;
pub mod ids;
pub mod money;
pub mod state;
pub mod transaction;

pub use category::Category;
pub use date::TxDate;
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use state::{BudgetState, ImportSummary};
pub use transaction::{Transaction, TransactionDraft, TxKind};
