//! Budgi Core Library
//!
//! Shared functionality for the Budgi personal finance tracker:
//! - Domain models with boundary normalization for the hosted store's
//!   inconsistent field naming
//! - Numeric coercion for loosely-typed stored values
//! - Pure aggregation engine (sums, category ranking, savings rate)
//! - Budget allocator (surplus splits, fixed category budgets)
//! - Insight rule engine (savings tier, concentration, demographic tips)
//! - Goal progress calculator
//! - Emergency fund bootstrap policy
//!
//! Everything past the snapshot boundary is a pure function over in-memory
//! records: no I/O, no clock, no shared state.

pub mod aggregate;
pub mod allocate;
pub mod emergency;
pub mod error;
pub mod goals;
pub mod insights;
pub mod models;
pub mod numeric;
pub mod overview;
pub mod snapshot;


pub use aggregate::{
    category_share, same_month, savings_rate, sum_amounts, sum_in_month, top_categories,
    totals_by_category,
};
pub use allocate::{
    allocate_fixed_budget, allocate_surplus, surplus_plan, AllocationBucket,
    AllocationRecommendation, RiskTier,
};
pub use emergency::maybe_create_emergency_fund;
pub use error::{Error, Result};
pub use goals::{goal_progress, total_savings, GoalProgress};
pub use insights::{
    generate_insights, AnalysisContext, Insight, InsightConfig, InsightEngine, InsightKind,
    InsightReport, InsightRule,
};
pub use models::{
    EmploymentCategory, Expense, ExtraIncome, Frequency, Goal, GoalType, Monetary, NewGoal,
    Profile,
};
pub use numeric::to_number;
pub use overview::{reverse_budget, MonthlyOverview, ReverseBudget};
pub use snapshot::{JsonFileSource, Snapshot, SnapshotSource};
