//! Time utilities: the epoch clock, duration rounding and the
//! minutes/hours split applied to every logged duration.

use crate::models::entry::Unit;
use chrono::Utc;

/// Seconds since the Unix epoch, with sub-second resolution.
pub fn now_epoch() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Express an elapsed wall-clock duration for display and logging.
/// Minutes are rounded to two decimals first; anything above 59.99
/// minutes switches to hours, so the log never shows "60.00 minutes".
pub fn split_duration(elapsed_secs: f64) -> (f64, Unit) {
    let minutes = round2(elapsed_secs / 60.0);
    if minutes > 59.99 {
        (round2(minutes / 60.0), Unit::Hours)
    } else {
        (minutes, Unit::Minutes)
    }
}

/// Hour-equivalent of a displayed duration, used for the persisted
/// counters regardless of the unit shown to the operator.
pub fn hour_equivalent(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Hours => value,
        Unit::Minutes => round2(value / 60.0),
    }
}
