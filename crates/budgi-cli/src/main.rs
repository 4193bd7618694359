//! Budgi CLI - personal finance insights from a store snapshot
//!
//! Usage:
//!   budgi overview --snapshot export.json      Dashboard summary cards
//!   budgi insights --snapshot export.json      Rule-based insights
//!   budgi invest --snapshot export.json        Surplus allocation plan
//!   budgi goals --snapshot export.json         Goal progress
//!   budgi bootstrap --snapshot export.json     Emergency fund seed

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Overview { month } => {
            let reference = commands::resolve_month(month.as_deref())?;
            commands::cmd_overview(&cli.snapshot, reference, cli.json)
        }
        Commands::Insights { month } => {
            let reference = commands::resolve_month(month.as_deref())?;
            commands::cmd_insights(&cli.snapshot, reference, cli.json)
        }
        Commands::Invest { month } => {
            let reference = commands::resolve_month(month.as_deref())?;
            commands::cmd_invest(&cli.snapshot, reference, cli.json)
        }
        Commands::Goals => commands::cmd_goals(&cli.snapshot, cli.json),
        Commands::Bootstrap => commands::cmd_bootstrap(&cli.snapshot, cli.json),
    }
}
