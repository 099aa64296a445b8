use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budgetbook::cli::{
    handle_category_command, handle_export_command, handle_import_command, handle_report_command,
    handle_tx_command, CategoryCommands, ExportCommands, ImportCommands, ReportCommands,
    TxCommands,
};
use budgetbook::config::{BudgetPaths, Settings};
use budgetbook::models::BudgetState;
use budgetbook::storage::StateStore;

#[derive(Parser)]
#[command(
    name = "budgetbook",
    version,
    about = "Personal budget tracker for the command line",
    long_about = "budgetbook records income and expense transactions against \
                  user-defined categories, keeps everything in one local JSON \
                  document, and reports totals and per-category/per-month \
                  breakdowns."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Tx(TxCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Reports over the current state
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import data from a file
    #[command(subcommand)]
    Import(ImportCommands),

    /// Clear stored data and restore the starter state
    Reset {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = StateStore::new(paths.state_file());

    let mut state =
        store.load_initial(settings.bootstrap_url.as_deref(), BudgetState::starter());

    let mutated = match cli.command {
        Some(Commands::Tx(cmd)) => handle_tx_command(&mut state, &settings, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut state, cmd)?,
        Some(Commands::Report(cmd)) => {
            handle_report_command(&state, &settings, cmd)?;
            false
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&state, cmd)?;
            false
        }
        Some(Commands::Import(cmd)) => handle_import_command(&mut state, cmd)?,
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!("This clears all stored data. Re-run with --yes to confirm.");
                false
            } else {
                store.clear()?;
                state = BudgetState::starter();
                println!("Data reset to the starter state.");
                true
            }
        }
        Some(Commands::Config) => {
            println!("budgetbook configuration");
            println!("========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("State file:     {}", paths.state_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Bootstrap URL:   {}",
                settings.bootstrap_url.as_deref().unwrap_or("(not set)")
            );
            false
        }
        None => {
            println!("budgetbook - personal budget tracker");
            println!();
            println!("Run 'budgetbook --help' for usage information.");
            println!("Run 'budgetbook report summary' to see where you stand.");
            false
        }
    };

    if mutated {
        store.save(&state)?;
    }

    Ok(())
}
