//! Period CLI - Inspect periods and run the contract self-check

mod check;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use period_core::application::PeriodClock;
use period_core::domain::constants::DEFAULT_CHECK_DELTA_MS;
use period_core::port::SystemTimeProvider;
use period_core::{Instant, Period};
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;

use crate::check::run_contract_checks;
use crate::config::CheckConfig;

#[derive(Parser)]
#[command(name = "period")]
#[command(about = "Directed time interval toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log output format (pretty or json)
    #[arg(long, env = "PERIOD_LOG_FORMAT", default_value = "pretty", global = true)]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the contract self-check against the system clock
    Check {
        /// Period length used by the scenarios, in milliseconds
        #[arg(
            long,
            env = "PERIOD_CHECK_DELTA_MS",
            default_value_t = DEFAULT_CHECK_DELTA_MS,
            allow_negative_numbers = true
        )]
        delta_ms: i64,
    },

    /// Show length and direction of a period
    Inspect {
        /// Start instant (ms since epoch)
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        /// End instant (ms since epoch)
        #[arg(long, allow_negative_numbers = true)]
        end: i64,
    },

    /// Test whether an instant lies within a period
    Contains {
        /// Start instant (ms since epoch)
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        /// End instant (ms since epoch)
        #[arg(long, allow_negative_numbers = true)]
        end: i64,

        /// Candidate instant (ms since epoch, default: now)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<i64>,
    },
}

#[derive(Tabled)]
struct PeriodRow {
    start: String,
    end: String,
    length_ms: i64,
    direction: &'static str,
}

impl From<&Period> for PeriodRow {
    fn from(period: &Period) -> Self {
        let direction = if period.is_backward() {
            "backward"
        } else if period.is_null() {
            "null"
        } else {
            "forward"
        };

        Self {
            start: period.start().to_string(),
            end: period.end().to_string(),
            length_ms: period.length(),
            direction,
        }
    }
}

fn build_period(start: i64, end: i64) -> Result<Period> {
    Period::new(Instant::from_millis(start), Instant::from_millis(end))
        .context("Invalid period")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_format)?;

    let clock = PeriodClock::new(Arc::new(SystemTimeProvider));

    match cli.command {
        Commands::Check { delta_ms } => {
            let config = CheckConfig::new(clock.now(), delta_ms)?;
            info!(now = %config.now, delta_ms = config.delta_ms, "Running contract self-check");

            let outcomes = run_contract_checks(&config);
            let failed = outcomes.iter().filter(|o| !o.passed).count();

            println!("{}", Table::new(&outcomes));
            println!();

            if failed > 0 {
                println!(
                    "{}",
                    format!("✗ {} of {} scenarios failed", failed, outcomes.len())
                        .red()
                        .bold()
                );
                anyhow::bail!("contract self-check failed");
            }

            println!(
                "{}",
                format!("✓ All {} scenarios passed", outcomes.len())
                    .green()
                    .bold()
            );
        }

        Commands::Inspect { start, end } => {
            let period = build_period(start, end)?;
            println!("{}", Table::new(vec![PeriodRow::from(&period)]));
        }

        Commands::Contains { start, end, at } => {
            let period = build_period(start, end)?;
            let candidate = at.map(Instant::from_millis).unwrap_or_else(|| clock.now());

            if period.contains(candidate)? {
                println!("{}", format!("✓ {} is within {}", candidate, period).green());
            } else {
                println!("{}", format!("✗ {} is outside {}", candidate, period).yellow());
            }
        }
    }

    Ok(())
}
