//! Storage layer for budgetbook
//!
//! Persists the whole `BudgetState` as one pretty-printed JSON blob with
//! atomic writes. Last write wins; there is no versioning and no schema
//! field.

pub mod bootstrap;
pub mod file_io;

pub use file_io::{read_json_opt, write_json_atomic};

use std::path::PathBuf;

use tracing::debug;

use crate::error::BudgetResult;
use crate::models::BudgetState;

/// Owns the path to the state blob and performs all reads/writes of it
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Create a store for the given blob path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The blob path
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the stored state
    ///
    /// `Ok(None)` when no blob exists; an error when the blob exists but
    /// cannot be read or parsed. The fallback decision is made once, in
    /// [`StateStore::load_initial`], not here.
    pub fn load(&self) -> BudgetResult<Option<BudgetState>> {
        read_json_opt(&self.path)
    }

    /// Resolve the initial state for this invocation
    ///
    /// Local state wins. Without one, a single bootstrap fetch is attempted
    /// when a URL is configured. Every failure along the way is non-fatal
    /// and falls through to `default`.
    pub fn load_initial(&self, bootstrap_url: Option<&str>, default: BudgetState) -> BudgetState {
        match self.load() {
            Ok(Some(state)) => return state,
            Ok(None) => {}
            Err(e) => debug!(error = %e, "ignoring unreadable state blob"),
        }

        if let Some(url) = bootstrap_url {
            match bootstrap::fetch_bootstrap(url) {
                Ok(state) => return state,
                Err(e) => debug!(error = %e, url, "bootstrap fetch failed, using default"),
            }
        }

        default
    }

    /// Serialize and overwrite the blob unconditionally
    pub fn save(&self, state: &BudgetState) -> BudgetResult<()> {
        write_json_atomic(&self.path, state)
    }

    /// Remove the blob; a missing file is not an error
    pub fn clear(&self) -> BudgetResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
