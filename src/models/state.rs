//! The BudgetState root aggregate and its mutation operations
//!
//! All state changes go through the methods defined here; callers never
//! reorder or rewrite the underlying vectors directly. Categories keep
//! insertion order, transactions are kept most-recent-first by convention
//! (new entries are prepended).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::import::csv::ParsedCsv;

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::transaction::{Transaction, TransactionDraft};

/// Root aggregate of categories and transactions
///
/// This is the only persisted entity; the whole document is written back
/// after every accepted mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
}

/// What a CSV merge added to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub transactions_added: usize,
    pub categories_added: usize,
}

impl BudgetState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// The hard-coded starter state: six seed categories, no transactions
    ///
    /// Used when neither a local blob nor a bootstrap document exists.
    pub fn starter() -> Self {
        let categories = ["Food", "Transport", "Bills", "Entertainment", "Health", "Other"]
            .into_iter()
            .map(Category::new)
            .collect();
        Self {
            categories,
            transactions: Vec::new(),
        }
    }

    /// Look up a category by id
    pub fn category_by_id(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a category by name, case-insensitively
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name_matches(name))
    }

    /// Resolve a category reference to its display name
    ///
    /// `None` references and dangling ids both come back as `None`; the
    /// presentation layer decides on a placeholder.
    pub fn category_name(&self, id: Option<CategoryId>) -> Option<&str> {
        id.and_then(|id| self.category_by_id(id)).map(|c| c.name.as_str())
    }

    /// Add a transaction, assigning a fresh identifier
    ///
    /// Prepends, keeping the list most-recent-first.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> TransactionId {
        let tx = draft.into_transaction();
        let id = tx.id;
        self.transactions.insert(0, tx);
        id
    }

    /// Remove the transaction with the given id
    ///
    /// Returns false (no-op) when no transaction matches.
    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Insert or replace a category
    ///
    /// When a category with the same id exists it is replaced in place,
    /// preserving its position; otherwise the category is appended.
    pub fn upsert_category(&mut self, cat: Category) {
        match self.categories.iter_mut().find(|c| c.id == cat.id) {
            Some(existing) => *existing = cat,
            None => self.categories.push(cat),
        }
    }

    /// Remove a category, reassigning its transactions
    ///
    /// Every transaction referencing the removed category is moved to the
    /// first remaining category, or to no category when none remain.
    /// Transactions referencing other missing ids are left untouched.
    /// Returns false when no category matches.
    pub fn delete_category(&mut self, id: CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return false;
        }

        let fallback = self.categories.first().map(|c| c.id);
        for tx in &mut self.transactions {
            if tx.category_id == Some(id) {
                tx.category_id = fallback;
            }
        }
        true
    }

    /// Merge parsed CSV data into the state
    ///
    /// Purely additive: existing entities are never deleted or mutated.
    /// Category names are resolved case-insensitively, creating missing
    /// categories with fresh ids. Rows failing the acceptance policy
    /// (unparsable or negative amount, date shorter than `YYYY-MM`) are
    /// dropped silently. Accepted transactions get fresh ids and are
    /// prepended as a block; new categories are appended.
    pub fn merge_import(&mut self, parsed: ParsedCsv) -> ImportSummary {
        let mut name_to_id: HashMap<String, CategoryId> = self
            .categories
            .iter()
            .map(|c| (c.name.to_lowercase(), c.id))
            .collect();

        // Unresolvable names fall back to the first pre-merge category.
        let fallback = self.categories.first().map(|c| c.id);

        let mut categories_added = 0;
        for name in &parsed.categories {
            let key = name.to_lowercase();
            if !name_to_id.contains_key(&key) {
                let cat = Category::new(name.clone());
                name_to_id.insert(key, cat.id);
                self.categories.push(cat);
                categories_added += 1;
            }
        }

        let mut accepted = Vec::new();
        for row in parsed.rows {
            let amount = match row.amount {
                Some(a) if !a.is_negative() => a,
                _ => {
                    debug!(date = %row.date, "dropping CSV row with invalid amount");
                    continue;
                }
            };
            if row.date.as_str().len() < 7 {
                debug!(date = %row.date, "dropping CSV row with malformed date");
                continue;
            }

            let category_id = name_to_id.get(&row.category.to_lowercase()).copied().or(fallback);
            accepted.push(
                TransactionDraft::new(row.date, row.kind, category_id, amount)
                    .with_note(row.note)
                    .into_transaction(),
            );
        }

        let transactions_added = accepted.len();
        self.transactions.splice(0..0, accepted);

        ImportSummary {
            transactions_added,
            categories_added,
        }
    }
}
