//! Practice duration computation

use chrono::{DateTime, Utc};

/// Elapsed practice time in whole minutes.
///
/// Rounded to the nearest minute and clamped to zero when the clocks are
/// inconsistent (completed before started). Pure function; persisting the
/// result back onto the session is the caller's choice.
pub fn compute(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> i64 {
    let ms = (completed_at - started_at).num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    ((ms as f64) / 60_000.0).round() as i64
}
