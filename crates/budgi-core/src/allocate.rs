//! Budget allocator
//!
//! Turns a monthly surplus into suggested investment allocations, and a
//! total income into fixed category budgets. Fractions are product-chosen
//! constants; callers are responsible for them summing to anything in
//! particular.

use serde::{Deserialize, Serialize};

/// Surplus above this gets the three-way equity/PPF/liquid split
pub const SURPLUS_HIGH: f64 = 5000.0;

/// Surplus must exceed this before any recommendation is made
pub const SURPLUS_LOW: f64 = 1000.0;

/// Share of income suggested for entertainment
pub const ENTERTAINMENT_BUDGET_SHARE: f64 = 0.10;

/// Suggested budget split for students: education-heavy, thin savings
pub const STUDENT_BUDGET_SPLIT: &[(&str, f64)] = &[
    ("Education", 0.40),
    ("Housing", 0.30),
    ("Food", 0.15),
    ("Entertainment", 0.10),
    ("Savings", 0.05),
];

/// Risk tier attached to an allocation recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    VeryLow,
    Low,
    Medium,
    MediumHigh,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bucket of a split policy
#[derive(Debug, Clone)]
pub struct AllocationBucket {
    pub label: &'static str,
    pub fraction: f64,
    pub risk: RiskTier,
    pub note: &'static str,
}

/// Display-ready allocation suggestion, rebuilt on every invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRecommendation {
    pub label: String,
    /// Fraction of the surplus this bucket receives
    pub fraction: f64,
    /// Rounded monetary amount (`round(surplus * fraction)`)
    pub suggested_amount: f64,
    pub risk: RiskTier,
    pub note: String,
}

/// Apply a split policy to a surplus figure.
pub fn allocate_surplus(surplus: f64, buckets: &[AllocationBucket]) -> Vec<AllocationRecommendation> {
    buckets
        .iter()
        .map(|bucket| AllocationRecommendation {
            label: bucket.label.to_string(),
            fraction: bucket.fraction,
            suggested_amount: (surplus * bucket.fraction).round(),
            risk: bucket.risk,
            note: bucket.note.to_string(),
        })
        .collect()
}

/// The built-in surplus policy.
///
/// Above [`SURPLUS_HIGH`] the surplus is split equity/PPF/liquid; between
/// [`SURPLUS_LOW`] and [`SURPLUS_HIGH`] it goes to an index SIP plus the
/// emergency fund; at or below [`SURPLUS_LOW`] no recommendation is made.
pub fn surplus_plan(surplus: f64) -> Vec<AllocationRecommendation> {
    if surplus > SURPLUS_HIGH {
        allocate_surplus(
            surplus,
            &[
                AllocationBucket {
                    label: "Equity Mutual Funds (SIP)",
                    fraction: 0.40,
                    risk: RiskTier::MediumHigh,
                    note: "Long-term wealth creation through diversified equity exposure",
                },
                AllocationBucket {
                    label: "PPF (Public Provident Fund)",
                    fraction: 0.30,
                    risk: RiskTier::Low,
                    note: "Tax-free returns with 15-year lock-in period",
                },
                AllocationBucket {
                    label: "Emergency Fund (Liquid)",
                    fraction: 0.30,
                    risk: RiskTier::VeryLow,
                    note: "Instant access for emergencies",
                },
            ],
        )
    } else if surplus > SURPLUS_LOW {
        allocate_surplus(
            surplus,
            &[
                AllocationBucket {
                    label: "SIP in Index Funds",
                    fraction: 0.60,
                    risk: RiskTier::Medium,
                    note: "Low-cost diversified market exposure",
                },
                AllocationBucket {
                    label: "Emergency Fund",
                    fraction: 0.40,
                    risk: RiskTier::VeryLow,
                    note: "Build your safety net first",
                },
            ],
        )
    } else {
        Vec::new()
    }
}

/// Fixed percentage budgets for category planning. No rounding.
pub fn allocate_fixed_budget(income: f64, splits: &[(&str, f64)]) -> Vec<(String, f64)> {
    splits
        .iter()
        .map(|(label, fraction)| (label.to_string(), income * fraction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_surplus_three_way_split() {
        let plan = surplus_plan(6000.0);
        assert_eq!(plan.len(), 3);

        let fractions: f64 = plan.iter().map(|r| r.fraction).sum();
        assert!((fractions - 1.0).abs() < f64::EPSILON);

        assert_eq!(plan[0].suggested_amount, 2400.0);
        assert_eq!(plan[0].risk, RiskTier::MediumHigh);
        assert_eq!(plan[1].suggested_amount, 1800.0);
        assert_eq!(plan[1].risk, RiskTier::Low);
        assert_eq!(plan[2].suggested_amount, 1800.0);
        assert_eq!(plan[2].risk, RiskTier::VeryLow);
    }

    #[test]
    fn test_mid_surplus_two_way_split() {
        let plan = surplus_plan(3000.0);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].label, "SIP in Index Funds");
        assert_eq!(plan[0].suggested_amount, 1800.0);
        assert_eq!(plan[1].suggested_amount, 1200.0);
    }

    #[test]
    fn test_small_surplus_no_recommendations() {
        assert!(surplus_plan(800.0).is_empty());
        assert!(surplus_plan(1000.0).is_empty());
        assert!(surplus_plan(0.0).is_empty());
        assert!(surplus_plan(-500.0).is_empty());
    }

    #[test]
    fn test_boundary_just_above_high() {
        // 5000 exactly falls into the two-way split; above it, three-way.
        assert_eq!(surplus_plan(5000.0).len(), 2);
        assert_eq!(surplus_plan(5000.01).len(), 3);
    }

    #[test]
    fn test_amounts_are_rounded() {
        let plan = surplus_plan(1001.0);
        // 1001 * 0.6 = 600.6 -> 601
        assert_eq!(plan[0].suggested_amount, 601.0);
    }

    #[test]
    fn test_fixed_budget_no_rounding() {
        let budgets = allocate_fixed_budget(5000.0, STUDENT_BUDGET_SPLIT);
        assert_eq!(budgets[0], ("Education".to_string(), 2000.0));
        assert_eq!(budgets[1], ("Housing".to_string(), 1500.0));
        assert_eq!(budgets[2], ("Food".to_string(), 750.0));
        assert_eq!(budgets[3], ("Entertainment".to_string(), 500.0));
        assert_eq!(budgets[4], ("Savings".to_string(), 250.0));
    }

    #[test]
    fn test_risk_tier_display() {
        assert_eq!(RiskTier::MediumHigh.to_string(), "Medium-High");
        assert_eq!(RiskTier::VeryLow.to_string(), "Very Low");
    }
}
