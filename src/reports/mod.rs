//! Aggregation functions
//!
//! Pure functions over `&BudgetState`. Nothing here is cached; callers
//! recompute from the authoritative state whenever they need a figure.

use std::collections::HashMap;

use crate::models::{BudgetState, CategoryId, Money, TxKind};

/// Overall income, expense, and balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Total for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    /// Year-month string (`YYYY-MM`)
    pub month: String,
    pub total: Money,
}

/// Compute overall totals
///
/// `balance` is always `income - expense`.
pub fn totals(state: &BudgetState) -> Totals {
    let income = state
        .transactions
        .iter()
        .filter(|t| t.kind == TxKind::Income)
        .map(|t| t.amount)
        .sum();

    let expense = state
        .transactions
        .iter()
        .filter(|t| t.kind == TxKind::Expense)
        .map(|t| t.amount)
        .sum::<Money>();

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Sum amounts of the given kind per category reference
///
/// Categories with no matching transactions are absent from the result, not
/// zero-valued. The `None` key accumulates uncategorized amounts.
pub fn sum_by_category(state: &BudgetState, kind: TxKind) -> HashMap<Option<CategoryId>, Money> {
    let mut sums: HashMap<Option<CategoryId>, Money> = HashMap::new();
    for tx in state.transactions.iter().filter(|t| t.kind == kind) {
        *sums.entry(tx.category_id).or_insert_with(Money::zero) += tx.amount;
    }
    sums
}

/// Sum amounts of the given kind per calendar month
///
/// Groups by the year-month prefix of the date and returns months sorted
/// ascending (lexicographic, correct for zero-padded ISO dates).
pub fn sum_by_month(state: &BudgetState, kind: TxKind) -> Vec<MonthTotal> {
    let mut sums: HashMap<&str, Money> = HashMap::new();
    for tx in state.transactions.iter().filter(|t| t.kind == kind) {
        *sums.entry(tx.date.month()).or_insert_with(Money::zero) += tx.amount;
    }

    let mut months: Vec<MonthTotal> = sums
        .into_iter()
        .map(|(month, total)| MonthTotal {
            month: month.to_string(),
            total,
        })
        .collect();
    months.sort_by(|a, b| a.month.cmp(&b.month));
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionDraft, TxDate};

    fn worked_example() -> BudgetState {
        let mut state = BudgetState::new();
        let food = Category::new("Food");
        state.upsert_category(food.clone());
        state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-01-05").unwrap(),
            TxKind::Expense,
            Some(food.id),
            Money::from_cents(5000),
        ));
        state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-02-01").unwrap(),
            TxKind::Income,
            Some(food.id),
            Money::from_cents(100_000),
        ));
        state
    }

    #[test]
    fn test_totals_worked_example() {
        let t = totals(&worked_example());
        assert_eq!(t.income, Money::from_cents(100_000));
        assert_eq!(t.expense, Money::from_cents(5000));
        assert_eq!(t.balance, Money::from_cents(95_000));
    }

    #[test]
    fn test_balance_identity() {
        let state = worked_example();
        let t = totals(&state);
        assert_eq!(t.balance, t.income - t.expense);

        let empty = totals(&BudgetState::new());
        assert_eq!(empty.balance, Money::zero());
    }

    #[test]
    fn test_sum_by_month_worked_example() {
        let months = sum_by_month(&worked_example(), TxKind::Expense);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].month, "2024-01");
        assert_eq!(months[0].total, Money::from_cents(5000));
    }

    #[test]
    fn test_sum_by_month_sorted_ascending() {
        let mut state = BudgetState::new();
        for date in ["2024-03-01", "2023-12-15", "2024-03-20", "2024-01-02"] {
            state.add_transaction(TransactionDraft::new(
                TxDate::parse(date).unwrap(),
                TxKind::Expense,
                None,
                Money::from_cents(100),
            ));
        }

        let months = sum_by_month(&state, TxKind::Expense);
        let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-01", "2024-03"]);
        assert_eq!(months[2].total, Money::from_cents(200));
    }

    #[test]
    fn test_sum_by_category_absent_when_unused() {
        let state = worked_example();
        let sums = sum_by_category(&state, TxKind::Expense);
        assert_eq!(sums.len(), 1);

        let food = state.categories[0].id;
        assert_eq!(sums.get(&Some(food)), Some(&Money::from_cents(5000)));
    }

    #[test]
    fn test_uncategorized_accumulates_under_none() {
        let mut state = BudgetState::new();
        state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-01-01").unwrap(),
            TxKind::Expense,
            None,
            Money::from_cents(300),
        ));

        let sums = sum_by_category(&state, TxKind::Expense);
        assert_eq!(sums.get(&None), Some(&Money::from_cents(300)));
    }

    #[test]
    fn test_breakdowns_agree_with_totals() {
        let mut state = worked_example();
        let food = state.categories[0].id;
        state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-02-10").unwrap(),
            TxKind::Expense,
            Some(food),
            Money::from_cents(1234),
        ));
        state.add_transaction(TransactionDraft::new(
            TxDate::parse("2024-02-11").unwrap(),
            TxKind::Expense,
            None,
            Money::from_cents(766),
        ));

        let t = totals(&state);
        for kind in [TxKind::Income, TxKind::Expense] {
            let expected = match kind {
                TxKind::Income => t.income,
                TxKind::Expense => t.expense,
            };

            let by_cat: Money = sum_by_category(&state, kind).values().copied().sum();
            assert_eq!(by_cat, expected);

            let by_month: Money = sum_by_month(&state, kind).iter().map(|m| m.total).sum();
            assert_eq!(by_month, expected);
        }
    }
}
