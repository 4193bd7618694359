//! Employment-category tip rule
//!
//! One static info template per known demographic category. Profiles whose
//! category didn't normalize at the boundary get no tip; that is a silent
//! skip, not an error.

use crate::models::EmploymentCategory;

use super::engine::{AnalysisContext, InsightRule};
use super::types::{Insight, InsightKind};

pub struct EmploymentTipRule;

impl EmploymentTipRule {
    pub fn new() -> Self {
        Self
    }

    fn template(category: EmploymentCategory) -> Insight {
        match category {
            EmploymentCategory::Working => Insight::new(
                InsightKind::Info,
                "Working Woman Financial Tips 💼",
                "As a working woman, focus on building an emergency fund worth 6 months of expenses.",
                "Consider starting a SIP in equity mutual funds for long-term wealth creation.",
            ),
            EmploymentCategory::Student => Insight::new(
                InsightKind::Info,
                "Student Financial Strategy 🎓",
                "Build good financial habits early. Even small savings now will compound over time.",
                "Try the 50-30-20 rule: 50% needs, 30% wants, 20% savings.",
            ),
            EmploymentCategory::Entrepreneur => Insight::new(
                InsightKind::Info,
                "Entrepreneur Money Management 🚀",
                "Separate business and personal finances. Build both emergency funds.",
                "Consider tax-saving investments like ELSS and PPF.",
            ),
            EmploymentCategory::NonWorking => Insight::new(
                InsightKind::Info,
                "Household Budget Optimization 🏠",
                "Focus on maximizing household savings and smart spending.",
                "Look into gold bonds and fixed deposits for secure investments.",
            ),
        }
    }
}

impl Default for EmploymentTipRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for EmploymentTipRule {
    fn name(&self) -> &'static str {
        "employment_tip"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        match ctx.profile.employment_category {
            Some(category) => vec![Self::template(category)],
            None => vec![],
        }
    }
}
