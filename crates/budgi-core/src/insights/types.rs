//! Core types for the insight rule engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tone of an insight, drives the icon/color the caller renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// The user is doing well
    Positive,
    /// On track, room to improve
    Neutral,
    /// Needs attention
    Warning,
    /// Static guidance, no judgement
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Positive => "positive",
            InsightKind::Neutral => "neutral",
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(InsightKind::Positive),
            "neutral" => Ok(InsightKind::Neutral),
            "warning" => Ok(InsightKind::Warning),
            "info" => Ok(InsightKind::Info),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A display-ready recommendation. Ephemeral: rebuilt on every evaluation,
/// never persisted, no identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    /// Suggested next step shown under the description
    pub action: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            action: action.into(),
        }
    }
}

/// Result of an insight run.
///
/// `NoData` means the user has neither expenses nor goals yet and the caller
/// should render an onboarding prompt. It is deliberately distinct from
/// `Insights(vec![])`; an empty insight list can only come from rules that
/// evaluated real data and matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightReport {
    NoData,
    Insights { insights: Vec<Insight> },
}

impl InsightReport {
    pub fn is_no_data(&self) -> bool {
        matches!(self, InsightReport::NoData)
    }

    /// The insight list, empty for the no-data case.
    pub fn insights(&self) -> &[Insight] {
        match self {
            InsightReport::NoData => &[],
            InsightReport::Insights { insights } => insights,
        }
    }
}

/// Tunable rule thresholds.
///
/// The defaults are the product's shipped values; deployments can adjust
/// them without touching the rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Savings rate above this is the positive tier (percent)
    pub excellent_rate: f64,
    /// Savings rate above this (up to excellent) is the neutral tier
    pub good_rate: f64,
    /// Warn when the top category exceeds this share of expenses (percent)
    pub concentration_limit: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            excellent_rate: 20.0,
            good_rate: 10.0,
            concentration_limit: 30.0,
        }
    }
}
