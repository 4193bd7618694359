//! Savings-rate tier rule
//!
//! Always produces exactly one insight: the user's savings rate lands in a
//! positive, neutral, or warning tier. The rate is shown to one decimal
//! place.

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightConfig, InsightKind};

pub struct SavingsRateRule {
    excellent_rate: f64,
    good_rate: f64,
}

impl SavingsRateRule {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            excellent_rate: config.excellent_rate,
            good_rate: config.good_rate,
        }
    }
}

impl InsightRule for SavingsRateRule {
    fn name(&self) -> &'static str {
        "savings_rate_tier"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let rate = ctx.savings_rate;

        let insight = if rate > self.excellent_rate {
            Insight::new(
                InsightKind::Positive,
                "Excellent Savings Rate! 🌟",
                format!(
                    "You're saving {:.1}% of your income. You're doing great!",
                    rate
                ),
                "Consider increasing your investment allocation for long-term wealth building.",
            )
        } else if rate > self.good_rate {
            Insight::new(
                InsightKind::Neutral,
                "Good Savings Habit 👍",
                format!(
                    "You're saving {:.1}% of your income. Try to reach {:.0}% for optimal financial health.",
                    rate, self.excellent_rate
                ),
                "Look for areas to reduce expenses or increase income.",
            )
        } else {
            Insight::new(
                InsightKind::Warning,
                "Improve Your Savings Rate 💪",
                format!(
                    "Your current savings rate is {:.1}%. Aim for at least {:.0}%.",
                    rate, self.excellent_rate
                ),
                "Review your expenses and identify areas to cut back.",
            )
        };

        vec![insight]
    }
}
