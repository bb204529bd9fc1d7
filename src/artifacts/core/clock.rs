//! Timestamp sources for new commits
//!
//! - [`SystemClock`]: wall-clock time in the local time zone
//! - [`ManualClock`]: starts at a fixed instant and advances by a fixed step on
//!   every reading, for deterministic histories
//!
//! [`load_from_env`] picks one of them from `HISTLOG_DATE` / `HISTLOG_STEP_SECS`.

use anyhow::Context;
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::sync::{Arc, Mutex, PoisonError};

pub const DATE_ENV: &str = "HISTLOG_DATE";
pub const STEP_ENV: &str = "HISTLOG_STEP_SECS";

/// Source of commit timestamps
pub trait Clock: std::fmt::Debug {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Clock that hands out `start`, `start + step`, `start + 2 * step`, ...
///
/// A negative step is clamped to zero so readings never go backwards. Once the
/// next reading would leave chrono's range the clock stays on its last instant.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<FixedOffset>>,
    step: TimeDelta,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>, step: TimeDelta) -> Self {
        ManualClock {
            current: Mutex::new(start),
            step: step.max(TimeDelta::zero()),
        }
    }

    /// Move the clock to an arbitrary instant; the next reading returns it
    pub fn set(&self, instant: DateTime<FixedOffset>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let reading = *current;
        *current = reading.checked_add_signed(self.step).unwrap_or(reading);
        reading
    }
}

/// Parse a pinned date the same way commit dates are accepted elsewhere:
/// RFC 2822 first, then `%Y-%m-%d %H:%M:%S %z`.
pub fn parse_date(date_str: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(date_str)
        .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
        .with_context(|| format!("Invalid date: {date_str}"))
}

/// Load the clock from environment variables
///
/// Reads `HISTLOG_DATE` and optionally `HISTLOG_STEP_SECS` (default 1).
/// If no date is provided, uses the system clock.
pub fn load_from_env() -> anyhow::Result<Arc<dyn Clock>> {
    let Ok(date_str) = std::env::var(DATE_ENV) else {
        return Ok(Arc::new(SystemClock));
    };
    let start = parse_date(&date_str)?;

    let step = match std::env::var(STEP_ENV) {
        Ok(step) => parse_step(&step)?,
        Err(_) => TimeDelta::seconds(1),
    };

    Ok(Arc::new(ManualClock::new(start, step)))
}

/// Parse a clock step in whole, non-negative seconds
pub fn parse_step(step: &str) -> anyhow::Result<TimeDelta> {
    let step_secs = step
        .parse::<i64>()
        .with_context(|| format!("{STEP_ENV} is not a whole number of seconds: {step}"))?;
    if step_secs < 0 {
        anyhow::bail!("{STEP_ENV} must not be negative: {step}");
    }

    TimeDelta::try_seconds(step_secs)
        .with_context(|| format!("{STEP_ENV} is out of range: {step}"))
}
