//! Display formatting for terminal output
//!
//! Formats data models for terminal display. Everything here returns a
//! String; printing is left to the CLI handlers.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use report::{format_category_sums, format_month_table, format_totals};
pub use transaction::{format_transaction_list, NO_CATEGORY, UNKNOWN_CATEGORY};
