//! Aggregation engine
//!
//! Pure single-pass aggregations over snapshot records: sums, calendar-month
//! filtering, category grouping and ranking, and the derived ratios that
//! feed the insight rules. Every function is total over empty input,
//! returning 0 or an empty collection rather than erroring.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Monetary};

/// Category assigned when an expense carries none
pub const FALLBACK_CATEGORY: &str = "Other";

/// Sum of coerced amounts over a collection.
pub fn sum_amounts<T: Monetary>(items: &[T]) -> f64 {
    items.iter().map(|item| item.amount()).sum()
}

/// True when two dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Sum restricted to records dated in the same month and year as `reference`.
///
/// The reference date is caller-supplied; the engine never reads the system
/// clock.
pub fn sum_in_month<T: Monetary>(items: &[T], reference: NaiveDate) -> f64 {
    items
        .iter()
        .filter(|item| same_month(item.date(), reference))
        .map(|item| item.amount())
        .sum()
}

/// Group expenses by category, preserving first-seen order.
///
/// Missing or empty categories fall back to [`FALLBACK_CATEGORY`]. New
/// category strings are accepted verbatim; this layer does no enum
/// validation.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let category = expense
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(FALLBACK_CATEGORY);

        match totals.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((category.to_string(), expense.amount)),
        }
    }

    totals
}

/// Top `n` categories by total, descending.
///
/// The sort is stable, so ties keep the first-seen order from
/// [`totals_by_category`].
pub fn top_categories(mut totals: Vec<(String, f64)>, n: usize) -> Vec<(String, f64)> {
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(n);
    totals
}

/// Percentage of income left after expenses.
///
/// Defined as 0 (not NaN or infinity) when income is zero or negative so the
/// threshold rules downstream behave sanely.
pub fn savings_rate(income: f64, expenses: f64) -> f64 {
    if income > 0.0 {
        (income - expenses) / income * 100.0
    } else {
        0.0
    }
}

/// One category's percentage share of the grand total, 0 when the total is 0.
pub fn category_share(category_total: f64, grand_total: f64) -> f64 {
    if grand_total > 0.0 {
        category_total / grand_total * 100.0
    } else {
        0.0
    }
}
