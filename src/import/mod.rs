//! Import codecs
//!
//! CSV import produces loosely-typed rows merged additively into the state;
//! JSON import validates and replaces the whole state.

pub mod csv;
pub mod json;

pub use csv::{parse_csv, CsvRow, ParsedCsv};
pub use json::parse_state_json;
