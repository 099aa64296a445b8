//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{default_export_filename, export_csv, export_json};
use crate::models::BudgetState;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions as CSV
    Csv {
        /// Output file path (defaults to budget_YYYY-MM-DD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full state as pretty-printed JSON
    Json {
        /// Output file path (defaults to budget_YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command; exports never mutate the state
pub fn handle_export_command(state: &BudgetState, cmd: ExportCommands) -> BudgetResult<()> {
    let (contents, path) = match cmd {
        ExportCommands::Csv { output } => (
            export_csv(state),
            output.unwrap_or_else(|| PathBuf::from(default_export_filename("csv"))),
        ),
        ExportCommands::Json { output } => (
            export_json(state)?,
            output.unwrap_or_else(|| PathBuf::from(default_export_filename("json"))),
        ),
    };

    std::fs::write(&path, contents)
        .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    println!(
        "Exported {} transactions to {}",
        state.transactions.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_csv_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let state = BudgetState::starter();

        handle_export_command(
            &state,
            ExportCommands::Csv {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,type,category,amount,note\n"));
    }

    #[test]
    fn test_export_json_writes_full_state() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let state = BudgetState::starter();

        handle_export_command(
            &state,
            ExportCommands::Json {
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let restored = crate::import::parse_state_json(&contents).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let state = BudgetState::new();
        let err = handle_export_command(
            &state,
            ExportCommands::Csv {
                output: Some(PathBuf::from("/nonexistent-dir/out.csv")),
            },
        )
        .unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
