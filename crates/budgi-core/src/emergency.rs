//! Emergency fund bootstrap policy
//!
//! At-most-once seeding of a dedicated emergency-fund goal. Idempotence
//! comes from the existence check; the store already scopes rows per user,
//! so there is a single writer and no locking.

use crate::models::{EmploymentCategory, Frequency, Goal, GoalType, NewGoal, Profile};

/// Months of income the fund should cover
pub const EMERGENCY_FUND_MONTHS: f64 = 6.0;

/// Auto-allocation percentage for working users
pub const WORKING_ALLOCATION_PCT: f64 = 15.0;

/// Auto-allocation percentage for everyone else
pub const DEFAULT_ALLOCATION_PCT: f64 = 10.0;

/// Name given to the seeded goal
pub const EMERGENCY_FUND_NAME: &str = "Medical Emergency Fund";

/// Derive the emergency-fund goal to insert, or `None` when the user has no
/// income or already has one.
pub fn maybe_create_emergency_fund(profile: &Profile, existing_goals: &[Goal]) -> Option<NewGoal> {
    if profile.monthly_income <= 0.0 {
        return None;
    }

    if existing_goals.iter().any(|g| g.is_emergency()) {
        tracing::debug!("Emergency fund already present; skipping bootstrap");
        return None;
    }

    let allocation = match profile.employment_category {
        Some(EmploymentCategory::Working) => WORKING_ALLOCATION_PCT,
        _ => DEFAULT_ALLOCATION_PCT,
    };

    Some(NewGoal {
        name: EMERGENCY_FUND_NAME.to_string(),
        target_amount: profile.monthly_income * EMERGENCY_FUND_MONTHS,
        current_savings: 0.0,
        frequency: Frequency::Monthly,
        goal_type: GoalType::Emergency,
        is_emergency_fund: true,
        auto_allocation_percentage: Some(allocation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(category: Option<EmploymentCategory>, income: f64) -> Profile {
        Profile {
            employment_category: category,
            monthly_income: income,
        }
    }

    fn goal_from(new: &NewGoal) -> Goal {
        Goal {
            id: "seeded".to_string(),
            name: new.name.clone(),
            target_amount: new.target_amount,
            current_savings: new.current_savings,
            frequency: new.frequency,
            goal_type: new.goal_type,
            is_emergency_fund: new.is_emergency_fund,
            auto_allocation_percentage: new.auto_allocation_percentage,
            deadline: None,
        }
    }

    #[test]
    fn test_seeds_six_months_of_income() {
        let p = profile(Some(EmploymentCategory::Working), 40000.0);
        let seeded = maybe_create_emergency_fund(&p, &[]).unwrap();
        assert_eq!(seeded.target_amount, 240000.0);
        assert_eq!(seeded.current_savings, 0.0);
        assert_eq!(seeded.goal_type, GoalType::Emergency);
        assert_eq!(seeded.frequency, Frequency::Monthly);
        assert!(seeded.is_emergency_fund);
    }

    #[test]
    fn test_allocation_by_employment_category() {
        let working = profile(Some(EmploymentCategory::Working), 1000.0);
        assert_eq!(
            maybe_create_emergency_fund(&working, &[])
                .unwrap()
                .auto_allocation_percentage,
            Some(15.0)
        );

        for category in [
            Some(EmploymentCategory::Student),
            Some(EmploymentCategory::NonWorking),
            Some(EmploymentCategory::Entrepreneur),
            None,
        ] {
            let p = profile(category, 1000.0);
            assert_eq!(
                maybe_create_emergency_fund(&p, &[])
                    .unwrap()
                    .auto_allocation_percentage,
                Some(10.0)
            );
        }
    }

    #[test]
    fn test_no_income_no_fund() {
        let p = profile(Some(EmploymentCategory::Working), 0.0);
        assert!(maybe_create_emergency_fund(&p, &[]).is_none());
    }

    #[test]
    fn test_idempotent_second_call_is_no_op() {
        let p = profile(Some(EmploymentCategory::Student), 5000.0);

        let first = maybe_create_emergency_fund(&p, &[]).unwrap();
        let stored = vec![goal_from(&first)];
        assert!(maybe_create_emergency_fund(&p, &stored).is_none());
    }

    #[test]
    fn test_existing_emergency_by_type_blocks_seeding() {
        let p = profile(Some(EmploymentCategory::Working), 5000.0);
        // Older rows set only goal_type, not the flag
        let mut existing = goal_from(&maybe_create_emergency_fund(&p, &[]).unwrap());
        existing.is_emergency_fund = false;
        assert_eq!(existing.goal_type, GoalType::Emergency);
        assert!(maybe_create_emergency_fund(&p, &[existing]).is_none());
    }
}
