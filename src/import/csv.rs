//! CSV import codec
//!
//! Parses the five-column interchange format (`date,type,category,amount,note`)
//! into loosely-typed rows. Rows keep the raw category *name*; resolving names
//! to ids is the caller's job (see `BudgetState::merge_import`).

use csv::ReaderBuilder;

use crate::models::{Money, TxDate, TxKind};

/// One surviving CSV line
///
/// `amount` is `None` when the field did not parse as a number; the merge
/// policy rejects such rows later rather than the codec.
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub date: TxDate,
    pub kind: TxKind,
    pub category: String,
    pub amount: Option<Money>,
    pub note: String,
}

/// Result of parsing a CSV document
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Deduplicated (case-insensitively), sorted category names seen in the rows
    pub categories: Vec<String>,
    /// One row per surviving line, in file order
    pub rows: Vec<CsvRow>,
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
    note: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Option<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Some(Self {
            date: find("date")?,
            kind: find("type")?,
            category: find("category")?,
            amount: find("amount")?,
            note: find("note"),
        })
    }
}

/// Parse CSV text into loosely-typed rows
///
/// Rows missing `date`, `type`, `category`, or `amount` are dropped, as are
/// rows whose `type` is not `income`/`expense`. A missing or malformed header
/// yields an empty result. This function never fails; per-row problems are
/// handled by dropping the row.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match reader.headers().ok().and_then(Columns::from_headers) {
        Some(columns) => columns,
        None => return ParsedCsv::default(),
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };
        let field = |idx: usize| record.get(idx).unwrap_or("");

        // Presence is judged on the raw field; a whitespace-only category
        // still counts as present and resolves to the fallback on merge.
        let date = field(columns.date);
        let kind = field(columns.kind);
        let category = field(columns.category);
        let amount = field(columns.amount);
        if date.is_empty() || kind.is_empty() || category.is_empty() || amount.is_empty() {
            continue;
        }

        let kind = match kind.parse::<TxKind>() {
            Ok(kind) => kind,
            Err(_) => continue,
        };

        rows.push(CsvRow {
            date: TxDate::from_raw(date.trim()),
            kind,
            category: category.trim().to_string(),
            amount: Money::parse(amount).ok(),
            note: columns.note.map(field).unwrap_or("").trim().to_string(),
        });
    }

    let mut categories: Vec<String> = Vec::new();
    for row in &rows {
        let name = row.category.as_str();
        if name.is_empty() {
            continue;
        }
        let folded = name.to_lowercase();
        if !categories.iter().any(|c| c.to_lowercase() == folded) {
            categories.push(name.to_string());
        }
    }
    categories.sort();

    ParsedCsv { categories, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_row() {
        let parsed = parse_csv("date,type,category,amount,note\n2024-03-01,expense,Taxi,15.50,cab");

        assert_eq!(parsed.categories, vec!["Taxi"]);
        assert_eq!(parsed.rows.len(), 1);

        let row = &parsed.rows[0];
        assert_eq!(row.date.as_str(), "2024-03-01");
        assert_eq!(row.kind, TxKind::Expense);
        assert_eq!(row.category, "Taxi");
        assert_eq!(row.amount, Some(Money::from_cents(1550)));
        assert_eq!(row.note, "cab");
    }

    #[test]
    fn test_comma_decimal_separator() {
        let parsed = parse_csv("date,type,category,amount,note\n2024-03-01,expense,Taxi,\"15,50\",cab");
        assert_eq!(parsed.rows[0].amount, Some(Money::from_cents(1550)));
    }

    #[test]
    fn test_unparsable_amount_survives_as_none() {
        let parsed = parse_csv("date,type,category,amount,note\n2024-03-01,expense,Taxi,abc,cab");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].amount, None);
    }

    #[test]
    fn test_multibyte_amount_survives_as_none() {
        // Amounts with multi-byte characters must not panic the codec
        let parsed = parse_csv("date,type,category,amount,note\n2024-03-01,expense,Taxi,1.€,cab");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].amount, None);
    }

    #[test]
    fn test_rows_missing_required_fields_are_dropped() {
        let parsed = parse_csv(
            "date,type,category,amount,note\n\
             ,expense,Taxi,10,no date\n\
             2024-03-01,,Taxi,10,no type\n\
             2024-03-01,expense,,10,no category\n\
             2024-03-01,expense,Taxi,,no amount\n\
             2024-03-01,transfer,Taxi,10,bad type\n\
             2024-03-01,expense,Taxi,10,ok",
        );
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].note, "ok");
    }

    #[test]
    fn test_categories_deduplicated_case_insensitively_and_sorted() {
        let parsed = parse_csv(
            "date,type,category,amount,note\n\
             2024-03-01,expense,taxi,10,\n\
             2024-03-02,expense,Taxi,20,\n\
             2024-03-03,expense,Bills,30,",
        );
        assert_eq!(parsed.categories, vec!["Bills", "taxi"]);
    }

    #[test]
    fn test_categories_deduplicated_beyond_ascii() {
        let parsed = parse_csv(
            "date,type,category,amount,note\n\
             2024-03-01,expense,Café,10,\n\
             2024-03-02,expense,CAFÉ,20,",
        );
        assert_eq!(parsed.categories, vec!["Café"]);
    }

    #[test]
    fn test_missing_header_yields_empty_result() {
        let parsed = parse_csv("2024-03-01,expense,Taxi,10,cab");
        assert!(parsed.rows.is_empty());
        assert!(parsed.categories.is_empty());

        let parsed = parse_csv("");
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_note_column_optional() {
        let parsed = parse_csv("date,type,category,amount\n2024-03-01,income,Salary,1000");
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].note, "");
    }
}
