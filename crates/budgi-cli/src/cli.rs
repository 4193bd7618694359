//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Budgi - personal finance insights from a store snapshot
#[derive(Parser)]
#[command(name = "budgi")]
#[command(about = "Personal finance tracker with rule-based insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file exported from the data store (JSON)
    #[arg(long, default_value = "budgi-snapshot.json", global = true)]
    pub snapshot: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard overview (income, spend, savings)
    Overview {
        /// Reference month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Generate personalized insights
    Insights {
        /// Reference month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Recommend investment allocations for this month's surplus
    Invest {
        /// Reference month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show progress for every savings goal
    Goals,

    /// Derive the emergency-fund goal to seed, if one is missing
    Bootstrap,
}
