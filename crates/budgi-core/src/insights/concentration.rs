//! Top-category concentration rule
//!
//! Warns when the single largest spending category takes more than the
//! configured share of total expenses.

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightConfig, InsightKind};

pub struct ConcentrationRule {
    concentration_limit: f64,
}

impl ConcentrationRule {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            concentration_limit: config.concentration_limit,
        }
    }
}

impl InsightRule for ConcentrationRule {
    fn name(&self) -> &'static str {
        "category_concentration"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let Some((top_category, _)) = ctx.top_categories.first() else {
            return vec![];
        };

        if ctx.top_category_share <= self.concentration_limit {
            return vec![];
        }

        vec![Insight::new(
            InsightKind::Warning,
            format!("High Spending on {}", top_category),
            format!(
                "{:.1}% of your expenses go to {}. Consider if this aligns with your priorities.",
                ctx.top_category_share, top_category
            ),
            "Review this category and look for optimization opportunities.",
        )]
    }
}
