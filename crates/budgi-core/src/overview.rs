//! Monthly dashboard overview
//!
//! The summary-card numbers: total income, current-month spend, accumulated
//! savings, and what is left to save. Pure derivation over a snapshot; the
//! reference date is caller-supplied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{sum_amounts, sum_in_month};
use crate::goals::total_savings;
use crate::models::{Expense, ExtraIncome, Goal, Profile};

/// Share of income a reverse budget sets aside before spending
pub const REVERSE_BUDGET_SAVINGS_SHARE: f64 = 0.20;

/// Key metrics for the dashboard cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyOverview {
    pub monthly_income: f64,
    pub extra_income: f64,
    /// Monthly income plus all recorded extra income
    pub total_income: f64,
    /// Expenses dated in the reference month
    pub month_expenses: f64,
    /// Savings accumulated across all goals
    pub total_savings: f64,
    /// Income left after this month's expenses, floored at 0 for display
    pub available_to_save: f64,
    pub over_budget: bool,
    pub goal_count: usize,
}

impl MonthlyOverview {
    pub fn compute(
        profile: &Profile,
        expenses: &[Expense],
        extra_incomes: &[ExtraIncome],
        goals: &[Goal],
        reference: NaiveDate,
    ) -> Self {
        let monthly_income = profile.monthly_income;
        let extra_income = sum_amounts(extra_incomes);
        let total_income = monthly_income + extra_income;
        let month_expenses = sum_in_month(expenses, reference);

        Self {
            monthly_income,
            extra_income,
            total_income,
            month_expenses,
            total_savings: total_savings(goals),
            available_to_save: (total_income - month_expenses).max(0.0),
            over_budget: month_expenses > monthly_income,
            goal_count: goals.len(),
        }
    }

    /// Surplus used for investment recommendations (may be negative).
    pub fn surplus(&self) -> f64 {
        self.total_income - self.month_expenses
    }
}

/// Save-first suggestion shown to non-working users: put aside 20% of any
/// income, spend from the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseBudget {
    pub suggested_savings: f64,
    pub available_for_expenses: f64,
}

pub fn reverse_budget(total_income: f64) -> ReverseBudget {
    ReverseBudget {
        suggested_savings: (total_income * REVERSE_BUDGET_SAVINGS_SHARE).round(),
        available_for_expenses: (total_income * (1.0 - REVERSE_BUDGET_SAVINGS_SHARE)).round(),
    }
}
