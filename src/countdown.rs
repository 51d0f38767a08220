//! Countdown to the start of The Open.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Remaining time split into display units. Each unit is already reduced
/// modulo the next larger one, so `hours` is below 24.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// True once the target has been reached.
    pub fn is_over(&self) -> bool {
        *self == TimeLeft::default()
    }
}

/// Time remaining until `target`.
///
/// # Arguments
/// * `now` - The current instant
/// * `target` - The instant being counted down to
///
/// # Returns
/// Whole days, hours, minutes and seconds. All zero once `target` has
/// passed; the count never goes negative.
pub fn time_left(now: DateTime<Utc>, target: DateTime<Utc>) -> TimeLeft {
    let remaining = (target - now).num_seconds();
    if remaining <= 0 {
        return TimeLeft::default();
    }

    TimeLeft {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
    }
}
