//! Domain models for Budgi
//!
//! All records are immutable snapshots of rows in the hosted store. The
//! dual-naming the store grew over time (`target_amount`/`targetAmount`,
//! `employment_category`/`employmentCategory`) is normalized here with serde
//! aliases so only the canonical snake_case names exist past this point.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::numeric::{lenient_f64, lenient_f64_opt};

/// Demographic category driving insight templates and allocation splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentCategory {
    Working,
    Student,
    NonWorking,
    Entrepreneur,
}

impl EmploymentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Student => "student",
            Self::NonWorking => "non-working",
            Self::Entrepreneur => "entrepreneur",
        }
    }
}

impl std::str::FromStr for EmploymentCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "working" => Ok(Self::Working),
            "student" => Ok(Self::Student),
            "non-working" | "nonworking" => Ok(Self::NonWorking),
            "entrepreneur" => Ok(Self::Entrepreneur),
            _ => Err(format!("Unknown employment category: {}", s)),
        }
    }
}

impl std::fmt::Display for EmploymentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lenient boundary parse: unrecognized category strings become `None` so
/// downstream rules skip them instead of failing the whole snapshot.
fn lenient_employment<'de, D>(deserializer: D) -> Result<Option<EmploymentCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| s.parse().ok()))
}

/// What a goal is saving toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    General,
    Emergency,
    Wedding,
    Maternity,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Emergency => "emergency",
            Self::Wedding => "wedding",
            Self::Maternity => "maternity",
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "emergency" => Ok(Self::Emergency),
            "wedding" => Ok(Self::Wedding),
            "maternity" => Ok(Self::Maternity),
            _ => Err(format!("Unknown goal type: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contribution cadence for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything with a coerced amount and a calendar date.
///
/// Lets the aggregation engine sum expenses and extra income with one set of
/// functions.
pub trait Monetary {
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Monetary for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Income recorded on top of the profile's monthly income
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraIncome {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(default)]
    pub source: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Monetary for ExtraIncome {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The per-user profile row (exactly one per user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(
        default,
        alias = "employmentCategory",
        deserialize_with = "lenient_employment"
    )]
    pub employment_category: Option<EmploymentCategory>,
    #[serde(default, alias = "monthlyIncome", deserialize_with = "lenient_f64")]
    pub monthly_income: f64,
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "targetAmount", deserialize_with = "lenient_f64")]
    pub target_amount: f64,
    #[serde(default, alias = "currentSavings", deserialize_with = "lenient_f64")]
    pub current_savings: f64,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, alias = "goalType")]
    pub goal_type: GoalType,
    #[serde(default, alias = "isEmergencyFund")]
    pub is_emergency_fund: bool,
    #[serde(
        default,
        alias = "autoAllocationPercentage",
        deserialize_with = "lenient_f64_opt"
    )]
    pub auto_allocation_percentage: Option<f64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    /// True when this goal serves as the user's emergency fund.
    ///
    /// The store carries both a flag and a goal type for this; older rows
    /// only set one of the two.
    pub fn is_emergency(&self) -> bool {
        self.is_emergency_fund || self.goal_type == GoalType::Emergency
    }
}

/// Insert shape for a goal the engine wants the caller to create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_savings: f64,
    pub frequency: Frequency,
    pub goal_type: GoalType,
    pub is_emergency_fund: bool,
    pub auto_allocation_percentage: Option<f64>,
}
