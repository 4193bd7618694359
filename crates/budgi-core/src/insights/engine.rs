//! Insight engine - evaluates rules against aggregated snapshot data

use chrono::NaiveDate;

use crate::aggregate::{
    category_share, same_month, savings_rate, sum_amounts, sum_in_month, top_categories,
    totals_by_category,
};
use crate::models::{Expense, ExtraIncome, Goal, Profile};

use super::concentration::ConcentrationRule;
use super::employment_tip::EmploymentTipRule;
use super::savings_rate_tier::SavingsRateRule;
use super::types::{Insight, InsightConfig, InsightReport};

/// How many ranked categories the rules look at
const TOP_CATEGORY_COUNT: usize = 3;

/// Derived numbers the rules evaluate against.
///
/// Built once per run, scoped to the reference month; rules never see raw
/// records.
#[derive(Debug, Clone)]
pub struct AnalysisContext<'a> {
    pub profile: &'a Profile,
    /// Percentage of the month's income left after the month's expenses
    pub savings_rate: f64,
    /// Categories ranked by month spend, descending, at most
    /// [`TOP_CATEGORY_COUNT`]
    pub top_categories: Vec<(String, f64)>,
    /// Share of the month's expenses held by the top category (percent)
    pub top_category_share: f64,
}

impl<'a> AnalysisContext<'a> {
    /// Aggregate the records dated in `reference`'s calendar month into
    /// rule inputs. Income is the profile's monthly income plus any extra
    /// income recorded for that month.
    pub fn for_month(
        profile: &'a Profile,
        expenses: &[Expense],
        extra_incomes: &[ExtraIncome],
        reference: NaiveDate,
    ) -> Self {
        let scoped: Vec<Expense> = expenses
            .iter()
            .filter(|e| same_month(e.date, reference))
            .cloned()
            .collect();

        let total_expenses = sum_amounts(&scoped);
        let income = profile.monthly_income + sum_in_month(extra_incomes, reference);
        let rate = savings_rate(income, total_expenses);
        let ranked = top_categories(totals_by_category(&scoped), TOP_CATEGORY_COUNT);
        let top_share = ranked
            .first()
            .map(|(_, total)| category_share(*total, total_expenses))
            .unwrap_or(0.0);

        Self {
            profile,
            savings_rate: rate,
            top_categories: ranked,
            top_category_share: top_share,
        }
    }
}

/// A single condition-to-message rule.
///
/// Rules are evaluated in registration order and every match appends; this
/// is not first-match-wins.
pub trait InsightRule: Send + Sync {
    /// Stable identifier used in log events
    fn name(&self) -> &'static str;

    /// Produce zero or more insights for this context
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The rule engine. Holds the built-in rules in their fixed order.
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Engine with the shipped thresholds.
    pub fn new() -> Self {
        Self::with_config(InsightConfig::default())
    }

    /// Engine with deployment-tuned thresholds.
    ///
    /// Rule order is fixed: savings-rate tier, then category concentration,
    /// then the employment tip.
    pub fn with_config(config: InsightConfig) -> Self {
        let mut engine = Self { rules: vec![] };
        engine.register(Box::new(SavingsRateRule::new(&config)));
        engine.register(Box::new(ConcentrationRule::new(&config)));
        engine.register(Box::new(EmploymentTipRule::new()));
        engine
    }

    /// Append a rule after the built-ins.
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Run every rule in order, collecting all matches.
    pub fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut insights = Vec::new();

        for rule in &self.rules {
            let matched = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.name(),
                count = matched.len(),
                "Insight rule evaluated"
            );
            insights.extend(matched);
        }

        insights
    }

    /// Registered rule names, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}

/// Run the full pipeline over a snapshot, scoped to `reference`'s month.
///
/// With no expenses and no goals recorded at all there is nothing to
/// analyze; the caller gets [`InsightReport::NoData`] so it can render an
/// onboarding prompt instead of a blank list. A month with no activity on
/// an otherwise-populated snapshot still runs the rules.
pub fn generate_insights(
    profile: &Profile,
    expenses: &[Expense],
    extra_incomes: &[ExtraIncome],
    goals: &[Goal],
    reference: NaiveDate,
    config: &InsightConfig,
) -> InsightReport {
    if expenses.is_empty() && goals.is_empty() {
        tracing::debug!("No expenses or goals recorded; skipping insight rules");
        return InsightReport::NoData;
    }

    let ctx = AnalysisContext::for_month(profile, expenses, extra_incomes, reference);
    let engine = InsightEngine::with_config(config.clone());
    InsightReport::Insights {
        insights: engine.evaluate(&ctx),
    }
}
