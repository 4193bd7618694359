//! Snapshot boundary to the hosted store
//!
//! The engine never talks to the store; callers fetch a consistent snapshot
//! of the four per-user read shapes (profile, expenses, goals, extra income)
//! and pass it in. This module defines that snapshot, the source trait, and
//! a JSON-file source for data exported from the store.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Expense, ExtraIncome, Goal, Profile};

/// A consistent read of one user's data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default, alias = "extraIncomes")]
    pub extra_incomes: Vec<ExtraIncome>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(
            expenses = snapshot.expenses.len(),
            goals = snapshot.goals.len(),
            extra_incomes = snapshot.extra_incomes.len(),
            has_profile = snapshot.profile.is_some(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Profile to analyze with; a missing row behaves as a zero-income,
    /// unknown-category profile so every downstream computation stays total.
    pub fn profile_or_default(&self) -> Profile {
        self.profile.clone().unwrap_or(Profile {
            employment_category: None,
            monthly_income: 0.0,
        })
    }
}

/// The four read shapes the store exposes, already scoped to the
/// authenticated user.
pub trait SnapshotSource {
    fn profile(&self) -> Result<Option<Profile>>;
    fn expenses(&self) -> Result<Vec<Expense>>;
    fn goals(&self) -> Result<Vec<Goal>>;
    fn extra_incomes(&self) -> Result<Vec<ExtraIncome>>;

    /// One consistent snapshot combining the four reads.
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            profile: self.profile()?,
            expenses: self.expenses()?,
            extra_incomes: self.extra_incomes()?,
            goals: self.goals()?,
        })
    }
}

/// Source backed by a JSON export file.
///
/// Reads the document once per call; the CLI loads a snapshot per
/// invocation, so there is no caching layer here.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Snapshot> {
        Snapshot::from_path(&self.path)
    }
}

impl SnapshotSource for JsonFileSource {
    fn profile(&self) -> Result<Option<Profile>> {
        Ok(self.load()?.profile)
    }

    fn expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.load()?.expenses)
    }

    fn goals(&self) -> Result<Vec<Goal>> {
        Ok(self.load()?.goals)
    }

    fn extra_incomes(&self) -> Result<Vec<ExtraIncome>> {
        Ok(self.load()?.extra_incomes)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentCategory;

    #[test]
    fn test_snapshot_from_json_with_mixed_naming() {
        let snapshot = Snapshot::from_json(
            r#"{
                "profile": {"employmentCategory": "entrepreneur", "monthly_income": "30000"},
                "expenses": [
                    {"id": "e1", "amount": 500, "category": "Food & Dining", "date": "2026-08-12"}
                ],
                "extraIncomes": [
                    {"id": "x1", "amount": "1200", "source": "Freelance", "date": "2026-08-01"}
                ],
                "goals": [
                    {"id": "g1", "name": "Trip", "targetAmount": 20000, "currentSavings": "4000"}
                ]
            }"#,
        )
        .unwrap();

        let profile = snapshot.profile_or_default();
        assert_eq!(
            profile.employment_category,
            Some(EmploymentCategory::Entrepreneur)
        );
        assert_eq!(profile.monthly_income, 30000.0);
        assert_eq!(snapshot.expenses.len(), 1);
        assert_eq!(snapshot.extra_incomes[0].amount, 1200.0);
        assert_eq!(snapshot.goals[0].current_savings, 4000.0);
    }

    #[test]
    fn test_empty_document_is_a_valid_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert!(snapshot.profile.is_none());
        assert!(snapshot.expenses.is_empty());
        assert_eq!(snapshot.profile_or_default().monthly_income, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Snapshot::from_json("{not json").is_err());
    }
}
