//! Contract self-check
//!
//! Exercises the Period contract against a real "now": constructor
//! failures, forward/backward/null consistency and containment, and that
//! mutating inputs or returned instants never reaches a constructed period.

use crate::config::CheckConfig;
use anyhow::{bail, ensure, Result};
use period_core::{DomainError, Instant, Period};
use tabled::Tabled;
use tracing::{debug, warn};

/// Result of one scenario
#[derive(Debug, Clone, Tabled)]
pub struct CheckOutcome {
    #[tabled(rename = "scenario")]
    pub scenario: &'static str,
    #[tabled(rename = "result", display_with = "display_passed")]
    pub passed: bool,
    #[tabled(rename = "detail")]
    pub detail: String,
}

fn display_passed(passed: &bool) -> String {
    let label = if *passed { "PASS" } else { "FAIL" };
    label.to_string()
}

type Scenario = fn(&CheckConfig) -> Result<()>;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("missing start", missing_start),
    ("missing end", missing_end),
    ("start before epoch", start_before_epoch),
    ("end before epoch", end_before_epoch),
    ("forward period", forward_period),
    ("backward period", backward_period),
    ("null period", null_period),
    ("input mutation", input_mutation),
    ("output mutation", output_mutation),
    ("idempotence", idempotence),
];

/// Run every scenario, never stopping at the first failure
pub fn run_contract_checks(config: &CheckConfig) -> Vec<CheckOutcome> {
    SCENARIOS
        .iter()
        .map(|(scenario, check)| match check(config) {
            Ok(()) => {
                debug!(scenario = *scenario, "Scenario passed");
                CheckOutcome {
                    scenario: *scenario,
                    passed: true,
                    detail: String::new(),
                }
            }
            Err(e) => {
                warn!(scenario = *scenario, error = %e, "Scenario failed");
                CheckOutcome {
                    scenario: *scenario,
                    passed: false,
                    detail: e.to_string(),
                }
            }
        })
        .collect()
}

fn at(millis: i64) -> Instant {
    Instant::from_millis(millis)
}

fn expect_null_argument(result: period_core::domain::error::Result<Period>) -> Result<()> {
    match result {
        Err(DomainError::NullArgument { .. }) => Ok(()),
        Err(other) => bail!("unexpected error: {}", other),
        Ok(period) => bail!("no NullArgument for {}", period),
    }
}

fn expect_invalid_argument(result: period_core::domain::error::Result<Period>) -> Result<()> {
    match result {
        Err(DomainError::InvalidArgument { .. }) => Ok(()),
        Err(other) => bail!("unexpected error: {}", other),
        Ok(period) => bail!("no InvalidArgument for {}", period),
    }
}

/// Length and direction agree with the expected signed length
fn check_consistency(period: &Period, length: i64) -> Result<()> {
    ensure!(
        period.length() == length,
        "invalid length: {} (expected {})",
        period.length(),
        length
    );
    ensure!(
        period.is_backward() == (length < 0),
        "is_backward() = {} for length {}",
        period.is_backward(),
        length
    );
    Ok(())
}

fn check_contains(period: &Period, inside: &[i64], outside: &[i64]) -> Result<()> {
    for &t in inside {
        ensure!(period.contains(at(t))?, "failed with inside instant: {}", t);
    }
    for &t in outside {
        ensure!(!period.contains(at(t))?, "failed with outside instant: {}", t);
    }
    ensure!(
        matches!(period.contains(None), Err(DomainError::NullArgument { .. })),
        "no NullArgument for missing candidate"
    );
    Ok(())
}

fn forward_expectations(period: &Period, now: i64, delta: i64) -> Result<()> {
    check_consistency(period, delta)?;
    check_contains(
        period,
        &[now, now + 1, now + delta - 1],
        &[now - 1, now + delta, now + delta + 1],
    )
}

fn missing_start(_: &CheckConfig) -> Result<()> {
    expect_null_argument(Period::new(None, at(1)))
}

fn missing_end(_: &CheckConfig) -> Result<()> {
    expect_null_argument(Period::new(at(0), None))
}

fn start_before_epoch(_: &CheckConfig) -> Result<()> {
    expect_invalid_argument(Period::new(at(-1), at(0)))
}

fn end_before_epoch(_: &CheckConfig) -> Result<()> {
    expect_invalid_argument(Period::new(at(0), at(-1)))
}

fn forward_period(config: &CheckConfig) -> Result<()> {
    let (now, delta) = (config.now.as_millis(), config.delta_ms);
    let period = Period::new(at(now), at(now + delta))?;
    forward_expectations(&period, now, delta)
}

fn backward_period(config: &CheckConfig) -> Result<()> {
    let (now, delta) = (config.now.as_millis(), config.delta_ms);
    let period = Period::new(at(now), at(now - delta))?;
    check_consistency(&period, -delta)?;
    check_contains(
        &period,
        &[now, now - 1, now - delta + 1],
        &[now + 1, now - delta, now - delta - 1],
    )
}

fn null_period(config: &CheckConfig) -> Result<()> {
    let now = config.now.as_millis();
    let period = Period::new(at(now), at(now))?;
    check_consistency(&period, 0)?;
    check_contains(&period, &[], &[now - 1, now, now + 1])
}

fn input_mutation(config: &CheckConfig) -> Result<()> {
    let (now, delta) = (config.now.as_millis(), config.delta_ms);
    let mut start = at(now);
    let mut end = at(now + delta);
    let period = Period::new(start, end)?;

    start.set_millis(now - delta);
    end.set_millis(now + delta * 2);
    ensure!(start != period.start(), "start binding did not change");

    forward_expectations(&period, now, delta)
}

fn output_mutation(config: &CheckConfig) -> Result<()> {
    let (now, delta) = (config.now.as_millis(), config.delta_ms);
    let period = Period::new(at(now), at(now + delta))?;

    let mut new_start = period.start();
    new_start -= delta;
    let mut new_end = period.end();
    new_end += delta;
    ensure!(new_start != period.start(), "returned start did not change");
    ensure!(new_end != period.end(), "returned end did not change");

    forward_expectations(&period, now, delta)
}

fn idempotence(config: &CheckConfig) -> Result<()> {
    let (now, delta) = (config.now.as_millis(), config.delta_ms);
    for end in [now + delta, now - delta, now] {
        let period = Period::new(at(now), at(end))?;
        let (length, backward) = (period.length(), period.is_backward());
        let (start, end) = (period.start(), period.end());

        for _ in 0..3 {
            ensure!(period.length() == length, "length changed between calls");
            ensure!(
                period.is_backward() == backward,
                "is_backward() changed between calls"
            );
            ensure!(period.start() == start, "start changed between calls");
            ensure!(period.end() == end, "end changed between calls");
        }
    }
    Ok(())
}
