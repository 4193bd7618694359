//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use budgi_core::insights::{generate_insights, InsightConfig, InsightKind, InsightReport};
use budgi_core::{
    goal_progress, maybe_create_emergency_fund, reverse_budget, surplus_plan, EmploymentCategory,
    MonthlyOverview, Snapshot,
};

/// Resolve a `YYYY-MM` argument to the first of that month, defaulting to
/// the current month. The core stays clock-free; "now" is resolved here.
pub fn resolve_month(month: Option<&str>) -> Result<NaiveDate> {
    match month {
        Some(m) => NaiveDate::parse_from_str(&format!("{}-01", m), "%Y-%m-%d")
            .with_context(|| format!("Invalid --month '{}' (use YYYY-MM)", m)),
        None => Ok(Utc::now().date_naive()),
    }
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    tracing::debug!(path = %path.display(), "Loading snapshot");
    Snapshot::from_path(path)
        .with_context(|| format!("Failed to load snapshot from {}", path.display()))
}

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Positive => "📈",
        InsightKind::Neutral => "🎯",
        InsightKind::Warning => "⚠️ ",
        InsightKind::Info => "🔔",
    }
}

pub fn cmd_overview(snapshot_path: &Path, reference: NaiveDate, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let profile = snapshot.profile_or_default();
    let overview = MonthlyOverview::compute(
        &profile,
        &snapshot.expenses,
        &snapshot.extra_incomes,
        &snapshot.goals,
        reference,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
        return Ok(());
    }

    println!();
    println!("💰 Monthly Overview ({})", reference.format("%B %Y"));
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Total income:      ₹{:.0}  (monthly ₹{:.0} + extra ₹{:.0})",
        overview.total_income, overview.monthly_income, overview.extra_income
    );
    println!(
        "   Month expenses:    ₹{:.0}  ({})",
        overview.month_expenses,
        if overview.over_budget {
            "over budget!"
        } else {
            "within budget"
        }
    );
    println!(
        "   Total savings:     ₹{:.0}  across {} goals",
        overview.total_savings, overview.goal_count
    );
    println!("   Available to save: ₹{:.0}", overview.available_to_save);

    if profile.employment_category == Some(EmploymentCategory::NonWorking) {
        let rb = reverse_budget(overview.total_income);
        println!();
        println!("   💝 Reverse budgeting suggestion: save first, spend what's left.");
        println!(
            "      Suggested savings ₹{:.0}, available for expenses ₹{:.0}",
            rb.suggested_savings, rb.available_for_expenses
        );
    }

    Ok(())
}

pub fn cmd_insights(snapshot_path: &Path, reference: NaiveDate, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let profile = snapshot.profile_or_default();
    let report = generate_insights(
        &profile,
        &snapshot.expenses,
        &snapshot.extra_incomes,
        &snapshot.goals,
        reference,
        &InsightConfig::default(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    match &report {
        InsightReport::NoData => {
            println!("🌸 Start by adding some expenses and goals to get personalized insights!");
            println!("   The more data you add, the better the recommendations become.");
        }
        InsightReport::Insights { insights } => {
            println!("✨ Personalized Insights ({})", reference.format("%B %Y"));
            println!("   ─────────────────────────────────────────────");
            for insight in insights {
                println!("   {} {}", kind_icon(insight.kind), insight.title);
                println!("      {}", insight.description);
                println!("      💡 {}", insight.action);
                println!();
            }
        }
    }

    Ok(())
}

pub fn cmd_invest(snapshot_path: &Path, reference: NaiveDate, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let profile = snapshot.profile_or_default();
    let overview = MonthlyOverview::compute(
        &profile,
        &snapshot.expenses,
        &snapshot.extra_incomes,
        &snapshot.goals,
        reference,
    );
    let surplus = overview.surplus();
    let plan = surplus_plan(surplus);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!();
    println!("📊 Investment Recommendations");
    println!("   Available surplus: ₹{:.0}/month", surplus.max(0.0));
    println!("   ─────────────────────────────────────────────");

    if plan.is_empty() {
        println!("   💡 Focus on reducing expenses before investing.");
        println!("      Track your spending to identify areas for savings.");
        return Ok(());
    }

    for rec in &plan {
        println!(
            "   {}  ₹{:.0}/month  ({:.0}%, {} risk)",
            rec.label,
            rec.suggested_amount,
            rec.fraction * 100.0,
            rec.risk
        );
        println!("      {}", rec.note);
    }

    Ok(())
}

pub fn cmd_goals(snapshot_path: &Path, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let profile = snapshot.profile_or_default();

    if json {
        let rows: Vec<serde_json::Value> = snapshot
            .goals
            .iter()
            .map(|goal| {
                let progress = goal_progress(goal, profile.monthly_income);
                serde_json::json!({
                    "id": goal.id,
                    "name": goal.name,
                    "progress": progress,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!();
    println!("🎯 Savings Goals");
    println!("   ─────────────────────────────────────────────");

    if snapshot.goals.is_empty() {
        println!("   No goals yet. Create one to start tracking progress.");
        return Ok(());
    }

    for goal in &snapshot.goals {
        let progress = goal_progress(goal, profile.monthly_income);
        let filled = (progress.percent / 10.0).round() as usize;
        let bar: String = "█".repeat(filled) + &"░".repeat(10 - filled);

        println!(
            "   {} {} {:.0}%  (₹{:.0} / ₹{:.0})",
            bar, goal.name, progress.percent, goal.current_savings, goal.target_amount
        );
        match progress.estimated_periods {
            Some(months) => println!("      ~{} months to go at 10% of income", months),
            None => println!("      goal met or no contribution assumed"),
        }
    }

    Ok(())
}

pub fn cmd_bootstrap(snapshot_path: &Path, json: bool) -> Result<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let profile = snapshot.profile_or_default();

    match maybe_create_emergency_fund(&profile, &snapshot.goals) {
        Some(seed) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&seed)?);
            } else {
                println!();
                println!("🛡️  Emergency fund to create:");
                println!("   {}", seed.name);
                println!("   Target: ₹{:.0} (6 months of income)", seed.target_amount);
                if let Some(pct) = seed.auto_allocation_percentage {
                    println!("   Auto-allocating {:.0}% of monthly income", pct);
                }
            }
        }
        None => {
            if json {
                println!("null");
            } else if profile.monthly_income <= 0.0 {
                println!("No monthly income on the profile; nothing to seed.");
            } else {
                println!("Emergency fund already exists; nothing to do.");
            }
        }
    }

    Ok(())
}
