//! budgetbook - Personal budget tracker for the command line
//!
//! Records income/expense transactions against user-defined categories,
//! persists the whole state as one local JSON document, and renders
//! summaries and per-category/per-month breakdowns.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: categories, transactions, and the `BudgetState` root aggregate
//! - `storage`: the single-blob JSON persistence layer with bootstrap fallback
//! - `reports`: pure aggregation functions
//! - `import` / `export`: CSV and JSON interchange codecs
//! - `cli` / `display`: clap subcommand handlers and terminal formatting

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
