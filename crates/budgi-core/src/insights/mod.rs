//! Insight rule engine
//!
//! Turns aggregated snapshot numbers into a short ordered list of
//! display-ready recommendations. Rules run in a fixed order and every
//! matching rule appends:
//!
//! 1. **Savings-rate tier** - always one insight (positive/neutral/warning)
//! 2. **Category concentration** - warns when one category dominates
//! 3. **Employment tip** - static guidance per demographic category
//!
//! ## Usage
//!
//! ```rust,ignore
//! use budgi_core::insights::{generate_insights, InsightConfig};
//!
//! let report = generate_insights(
//!     &profile,
//!     &expenses,
//!     &extra_incomes,
//!     &goals,
//!     reference,
//!     &InsightConfig::default(),
//! );
//! ```

pub mod concentration;
pub mod employment_tip;
pub mod engine;
pub mod savings_rate_tier;
pub mod types;

pub use concentration::ConcentrationRule;
pub use employment_tip::EmploymentTipRule;
pub use engine::{generate_insights, AnalysisContext, InsightEngine, InsightRule};
pub use savings_rate_tier::SavingsRateRule;
pub use types::{Insight, InsightConfig, InsightKind, InsightReport};
