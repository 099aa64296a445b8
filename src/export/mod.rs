//! Export codecs
//!
//! CSV for the five-column interchange format, JSON for the full state
//! document.

pub mod csv;
pub mod json;

pub use csv::export_csv;
pub use json::{default_export_filename, export_json};
