//! Transaction model
//!
//! Represents a single dated income or expense record tied to an optional
//! category reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date::TxDate;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Kind of transaction: money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    #[default]
    Expense,
}

impl TxKind {
    /// Serialized form, also used in the CSV interchange format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("expected 'income' or 'expense', got '{}'", other)),
        }
    }
}

/// A single dated income or expense record
///
/// `category_id == None` means "no category". A `Some(id)` that no longer
/// resolves to a live category is a tolerated dangling reference; listings
/// render it as a placeholder, and category deletion is the only operation
/// that rewrites references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date (YYYY-MM-DD)
    pub date: TxDate,

    /// Income or expense
    pub kind: TxKind,

    /// Category reference, None for uncategorized
    pub category_id: Option<CategoryId>,

    /// Amount (non-negative by policy; the sign lives in `kind`)
    pub amount: Money,

    /// Free-text note
    #[serde(default)]
    pub note: String,
}

/// A transaction payload without an identifier
///
/// The only way user input becomes a [`Transaction`] is through a state
/// operation that assigns a fresh id.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: TxDate,
    pub kind: TxKind,
    pub category_id: Option<CategoryId>,
    pub amount: Money,
    pub note: String,
}

impl TransactionDraft {
    /// Create a draft with an empty note
    pub fn new(date: TxDate, kind: TxKind, category_id: Option<CategoryId>, amount: Money) -> Self {
        Self {
            date,
            kind,
            category_id,
            amount,
            note: String::new(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Materialize the draft with a fresh id
    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            date: self.date,
            kind: self.kind,
            category_id: self.category_id,
            amount: self.amount,
            note: self.note,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.kind, self.amount)
    }
}
