//! Transaction date type
//!
//! Dates are stored as ISO calendar date strings (YYYY-MM-DD). Lexicographic
//! ordering on the zero-padded string matches chronological ordering, which is
//! what export sorting and monthly grouping rely on.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO calendar date string (YYYY-MM-DD)
///
/// Dates entered through the CLI are validated as full calendar dates.
/// Dates arriving through CSV import are looser: the import policy only
/// requires at least a year and month (`YYYY-MM`), so the inner string may
/// legitimately be shorter than a full date. Use [`TxDate::parse`] for strict
/// validation and [`TxDate::from_raw`] at the import boundary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxDate(String);

impl TxDate {
    /// Strictly parse a full calendar date
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| DateParseError::InvalidDate(s.to_string()))?;
        Ok(Self(s.to_string()))
    }

    /// Wrap a raw date string without validation
    ///
    /// Used by the CSV import path, where acceptance is decided by the merge
    /// policy (length >= 7) rather than strict parsing.
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self(Local::now().format("%Y-%m-%d").to_string())
    }

    /// The raw date string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar year-month (first 7 characters, `YYYY-MM`)
    pub fn month(&self) -> &str {
        match self.0.char_indices().nth(7) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for TxDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TxDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    InvalidDate(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::InvalidDate(s) => {
                write!(f, "Invalid date (expected YYYY-MM-DD): {}", s)
            }
        }
    }
}

impl std::error::Error for DateParseError {}
