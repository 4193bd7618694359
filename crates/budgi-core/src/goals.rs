//! Goal progress calculator

use serde::{Deserialize, Serialize};

use crate::models::Goal;

/// Assumed monthly contribution toward a goal, as a share of monthly income
pub const ASSUMED_CONTRIBUTION_RATE: f64 = 0.10;

/// Progress figures for one goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Unclamped completion percentage
    pub raw_percent: f64,
    /// Completion clamped to 0..=100 for progress bars
    pub percent: f64,
    /// Months until completion at the assumed contribution, `None` when the
    /// goal is already met or no contribution can be assumed
    pub estimated_periods: Option<u32>,
}

/// Compute progress for a goal given the profile's monthly income.
///
/// Target amounts are >0 by construction, but a malformed row must not
/// produce NaN, so the divisor is floored at 1.
pub fn goal_progress(goal: &Goal, monthly_income: f64) -> GoalProgress {
    let raw_percent = goal.current_savings / goal.target_amount.max(1.0) * 100.0;
    let percent = raw_percent.clamp(0.0, 100.0);

    let remaining = goal.target_amount - goal.current_savings;
    let contribution = monthly_income * ASSUMED_CONTRIBUTION_RATE;
    let estimated_periods = if remaining <= 0.0 || contribution <= 0.0 {
        None
    } else {
        Some((remaining / contribution).ceil() as u32)
    };

    GoalProgress {
        raw_percent,
        percent,
        estimated_periods,
    }
}

/// Savings accumulated across all goals.
pub fn total_savings(goals: &[Goal]) -> f64 {
    goals.iter().map(|g| g.current_savings).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, GoalType};

    fn goal(current: f64, target: f64) -> Goal {
        Goal {
            id: "g1".to_string(),
            name: "Test".to_string(),
            target_amount: target,
            current_savings: current,
            frequency: Frequency::Monthly,
            goal_type: GoalType::General,
            is_emergency_fund: false,
            auto_allocation_percentage: None,
            deadline: None,
        }
    }

    #[test]
    fn test_halfway_goal() {
        let progress = goal_progress(&goal(5000.0, 10000.0), 0.0);
        assert_eq!(progress.raw_percent, 50.0);
        assert_eq!(progress.percent, 50.0);
    }

    #[test]
    fn test_overfunded_goal_clamps_display_only() {
        let progress = goal_progress(&goal(12000.0, 10000.0), 20000.0);
        assert_eq!(progress.raw_percent, 120.0);
        assert_eq!(progress.percent, 100.0);
        // Already met: no estimate
        assert_eq!(progress.estimated_periods, None);
    }

    #[test]
    fn test_zero_target_does_not_produce_nan() {
        let progress = goal_progress(&goal(50.0, 0.0), 1000.0);
        assert!(progress.raw_percent.is_finite());
        assert_eq!(progress.raw_percent, 5000.0); // divisor floored at 1
        assert_eq!(progress.percent, 100.0);
    }

    #[test]
    fn test_estimated_periods_ceiling() {
        // remaining 5000, contribution 10% of 15000 = 1500 -> ceil(3.33) = 4
        let progress = goal_progress(&goal(5000.0, 10000.0), 15000.0);
        assert_eq!(progress.estimated_periods, Some(4));
    }

    #[test]
    fn test_no_estimate_without_income() {
        let progress = goal_progress(&goal(0.0, 10000.0), 0.0);
        assert_eq!(progress.estimated_periods, None);
    }

    #[test]
    fn test_total_savings_sums_goals() {
        let goals = vec![goal(100.0, 1000.0), goal(250.0, 500.0)];
        assert_eq!(total_savings(&goals), 350.0);
        assert_eq!(total_savings(&[]), 0.0);
    }
}
