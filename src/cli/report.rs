//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_sums, format_month_table, format_totals};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetState, TxKind};
use crate::reports::{sum_by_category, sum_by_month, totals};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overall income, expense, and balance
    Summary,

    /// Per-month totals for one kind
    Monthly {
        /// Transaction kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },

    /// Per-category totals for one kind
    Categories {
        /// Transaction kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
    },
}

/// Handle a report command; reports never mutate the state
pub fn handle_report_command(
    state: &BudgetState,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Summary => {
            print!("{}", format_totals(&totals(state), symbol));
        }

        ReportCommands::Monthly { kind } => {
            let kind: TxKind = kind.parse().map_err(BudgetError::Validation)?;
            print!("{}", format_month_table(&sum_by_month(state, kind), symbol));
        }

        ReportCommands::Categories { kind } => {
            let kind: TxKind = kind.parse().map_err(BudgetError::Validation)?;
            let sums = sum_by_category(state, kind);
            print!("{}", format_category_sums(state, &sums, symbol));
        }
    }

    Ok(())
}
