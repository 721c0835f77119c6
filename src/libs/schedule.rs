//! Shift window resolution.
//!
//! Turns the recurring wall-clock shift definition into a concrete dated
//! interval relative to a reference instant. The resolver considers the
//! occurrences anchored on yesterday, today and tomorrow, which is what makes
//! shifts crossing midnight work: yesterday's occurrence may still be active
//! in the small hours of today.
//!
//! Everything here is a pure function of its inputs; the wall clock is
//! sampled by the caller and passed in.

use crate::libs::config::ShiftConfig;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Shift length used when no end time is configured.
const DEFAULT_SHIFT_MINUTES: i64 = 9 * 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Strictly parses an "HH:MM" wall-clock string.
///
/// Both components must be numeric and form a valid time of day. Used for
/// the shift bounds: a shift without a well-formed start time is meaningless
/// and is treated as not configured.
pub fn parse_time_strict(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.trim().split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Leniently parses an "HH:MM" wall-clock string.
///
/// Non-numeric components degrade to 0 instead of failing, which is the
/// tolerant handling break times get. Still `None` when there is no ':'
/// separator or the components cannot form a valid time of day.
pub fn parse_time_lenient(s: &str) -> Option<NaiveTime> {
    let (h, m) = s.trim().split_once(':')?;
    let hour: u32 = h.trim().parse().unwrap_or(0);
    let minute: u32 = m.trim().parse().unwrap_or(0);
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// A concrete, dated instantiation of the recurring shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOccurrence {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftOccurrence {
    fn anchored(date: NaiveDate, start: NaiveTime, duration: Duration) -> Self {
        let start = date.and_time(start);
        Self { start, end: start + duration }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Resolves the shift occurrence that contains `now`, or failing that the
/// next future occurrence.
///
/// Returns `None` when no start time is configured or it does not parse.
/// Candidates are checked in yesterday/today/tomorrow order so that an
/// overnight shift started yesterday wins over today's not-yet-started one.
/// Plausibility is not validated: a configured 23h59m shift resolves like
/// any other.
pub fn resolve_shift_window(config: &ShiftConfig, now: NaiveDateTime) -> Option<ShiftOccurrence> {
    let start = config.start.as_deref().and_then(parse_time_strict)?;
    let duration = shift_duration(config, start);
    let today = now.date();

    let candidates = [
        ShiftOccurrence::anchored(today - Duration::days(1), start, duration),
        ShiftOccurrence::anchored(today, start, duration),
        ShiftOccurrence::anchored(today + Duration::days(1), start, duration),
    ];

    if let Some(active) = candidates.iter().find(|c| c.contains(now)) {
        return Some(*active);
    }

    // No occurrence is active; the upcoming one starts today or tomorrow.
    if now < candidates[1].start {
        Some(candidates[1])
    } else {
        Some(candidates[2])
    }
}

/// Length of one shift occurrence.
///
/// An end at or before the start wraps past midnight, so the result is
/// always strictly positive (equal start and end means a full day). Missing
/// or malformed end times fall back to the 9-hour default.
fn shift_duration(config: &ShiftConfig, start: NaiveTime) -> Duration {
    match config.end.as_deref().and_then(parse_time_strict) {
        Some(end) => {
            let start_minutes = i64::from(start.hour() * 60 + start.minute());
            let end_minutes = i64::from(end.hour() * 60 + end.minute());
            let minutes = if end_minutes <= start_minutes {
                end_minutes + MINUTES_PER_DAY - start_minutes
            } else {
                end_minutes - start_minutes
            };
            Duration::minutes(minutes)
        }
        None => Duration::minutes(DEFAULT_SHIFT_MINUTES),
    }
}
