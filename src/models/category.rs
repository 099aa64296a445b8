//! Category model
//!
//! A category is a named grouping for transactions. Name uniqueness is not
//! enforced by the model; import deduplication compares names
//! case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A named grouping for transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, generated once at creation and never reused
    pub id: CategoryId,

    /// Display name
    pub name: String,
}

impl Category {
    /// Create a new category with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }

    /// Case-insensitive name match, used for lookups and import deduplication
    ///
    /// Folds with Unicode lowercasing so non-ASCII names ("Café") compare the
    /// same way here as in the import merge.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
