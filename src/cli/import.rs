//! Import CLI commands
//!
//! CSV imports merge additively into the current state; JSON imports replace
//! it outright. A rejected JSON document leaves the state untouched.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::import::{parse_csv, parse_state_json};
use crate::models::BudgetState;

/// Import subcommands
#[derive(Subcommand)]
pub enum ImportCommands {
    /// Merge transactions from a CSV file
    Csv {
        /// Path to CSV file (columns: date,type,category,amount,note)
        file: PathBuf,
    },

    /// Replace the whole state from a JSON file
    Json {
        /// Path to JSON file (full budget document)
        file: PathBuf,
    },
}

fn read_import_file(path: &Path) -> BudgetResult<String> {
    if !path.exists() {
        return Err(BudgetError::ImportFormat(format!(
            "File not found: {}",
            path.display()
        )));
    }
    std::fs::read_to_string(path)
        .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Handle an import command, returning whether the state was mutated
pub fn handle_import_command(state: &mut BudgetState, cmd: ImportCommands) -> BudgetResult<bool> {
    match cmd {
        ImportCommands::Csv { file } => {
            let text = read_import_file(&file)?;
            let summary = state.merge_import(parse_csv(&text));

            println!(
                "Imported {} transactions ({} new categories)",
                summary.transactions_added, summary.categories_added
            );
            Ok(true)
        }

        ImportCommands::Json { file } => {
            let text = read_import_file(&file)?;
            let imported = parse_state_json(&text)?;

            println!(
                "Replaced state: {} categories, {} transactions",
                imported.categories.len(),
                imported.transactions.len()
            );
            *state = imported;
            Ok(true)
        }
    }
}
