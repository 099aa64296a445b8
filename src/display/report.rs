//! Report display formatting

use std::collections::HashMap;

use crate::models::{BudgetState, CategoryId, Money};
use crate::reports::{MonthTotal, Totals};

use super::transaction::{NO_CATEGORY, UNKNOWN_CATEGORY};

/// Format the overall summary
pub fn format_totals(totals: &Totals, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str("=======\n");
    output.push_str(&format!(
        "  Income:   {}\n",
        totals.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Expense:  {}\n",
        totals.expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Balance:  {}\n",
        totals.balance.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format a per-month breakdown, months ascending
pub fn format_month_table(months: &[MonthTotal], currency_symbol: &str) -> String {
    if months.is_empty() {
        return "No matching transactions.".to_string();
    }

    let mut output = String::new();
    output.push_str("MONTH    TOTAL\n");
    for entry in months {
        output.push_str(&format!(
            "{}  {}\n",
            entry.month,
            entry.total.format_with_symbol(currency_symbol)
        ));
    }
    output
}

/// Format a per-category breakdown
///
/// Categories appear in state insertion order; the uncategorized bucket, if
/// present, comes last. Only categories with matching transactions appear.
pub fn format_category_sums(
    state: &BudgetState,
    sums: &HashMap<Option<CategoryId>, Money>,
    currency_symbol: &str,
) -> String {
    if sums.is_empty() {
        return "No matching transactions.".to_string();
    }

    let mut rows: Vec<(&str, Money)> = Vec::new();
    for category in &state.categories {
        if let Some(total) = sums.get(&Some(category.id)) {
            rows.push((category.name.as_str(), *total));
        }
    }
    if let Some(total) = sums.get(&None) {
        rows.push((NO_CATEGORY, *total));
    }
    // Dangling references: present in the sums but not in the category list
    let dangling: Money = sums
        .iter()
        .filter(|(id, _)| id.is_some_and(|id| state.category_by_id(id).is_none()))
        .map(|(_, total)| *total)
        .sum();
    if !dangling.is_zero() {
        rows.push((UNKNOWN_CATEGORY, dangling));
    }

    let name_width = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(8).max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  TOTAL\n",
        "CATEGORY",
        name_width = name_width
    ));
    for (name, total) in rows {
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            name,
            total.format_with_symbol(currency_symbol),
            name_width = name_width
        ));
    }
    output
}
