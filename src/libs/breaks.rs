//! Break projection into a resolved shift occurrence.
//!
//! A break slot is only a wall-clock time of day; it becomes an occurrence
//! once combined with the calendar date of a concrete shift window. Breaks
//! scheduled for the next-day portion of an overnight shift land a calendar
//! day after the shift start.

use crate::libs::config::BreaksConfig;
use crate::libs::formatter::{format_duration, FormattedBreak};
use crate::libs::schedule::{parse_time_lenient, ShiftOccurrence};
use chrono::{Duration, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the three configurable break slots.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BreakKey {
    Break1,
    Break2,
    Break3,
}

impl BreakKey {
    /// All slots in their fixed order, which is also the tie-break order
    /// when two breaks are scheduled at the same instant.
    pub const ALL: [BreakKey; 3] = [BreakKey::Break1, BreakKey::Break2, BreakKey::Break3];
}

impl fmt::Display for BreakKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            BreakKey::Break1 => "break1",
            BreakKey::Break2 => "break2",
            BreakKey::Break3 => "break3",
        };
        write!(f, "{}", name)
    }
}

/// A break slot projected into a specific shift occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOccurrence {
    pub key: BreakKey,
    pub start: NaiveDateTime,
    pub duration: Duration,
}

/// Projects the configured break slots into a shift occurrence.
///
/// Returns at most three entries, sorted ascending by start. The sort is
/// stable, so equal timestamps keep the slot order. A projected break that
/// falls outside the occurrence (bounds inclusive) is discarded, not
/// clamped.
pub fn project_breaks(breaks: &BreaksConfig, occurrence: &ShiftOccurrence) -> Vec<BreakOccurrence> {
    let mut projected: Vec<BreakOccurrence> = BreakKey::ALL
        .iter()
        .filter_map(|&key| {
            let slot = breaks.slot(key);
            let time = slot.time.as_deref().and_then(parse_time_lenient)?;
            let mut start = occurrence.start.date().and_time(time);
            if start < occurrence.start {
                start += Duration::days(1);
            }
            if !occurrence.contains(start) {
                return None;
            }
            Some(BreakOccurrence {
                key,
                start,
                duration: Duration::seconds(slot.duration_secs as i64),
            })
        })
        .collect();
    projected.sort_by_key(|b| b.start);
    projected
}

/// First projected break starting strictly after `now`.
///
/// A break starting exactly at `now` has already begun and is not upcoming.
pub fn next_break_after(breaks: &[BreakOccurrence], now: NaiveDateTime) -> Option<&BreakOccurrence> {
    breaks.iter().find(|b| b.start > now)
}

/// A trait for formatting a collection of break occurrences for display.
pub trait BreakGroup {
    /// Formats break occurrences into [`FormattedBreak`] rows.
    fn format(&self) -> Vec<FormattedBreak>;
}

impl BreakGroup for Vec<BreakOccurrence> {
    fn format(&self) -> Vec<FormattedBreak> {
        self.iter()
            .map(|b| FormattedBreak {
                slot: b.key.to_string(),
                start: b.start.format("%H:%M").to_string(),
                end: (b.start + b.duration).format("%H:%M").to_string(),
                duration: format_duration(&b.duration),
            })
            .collect()
    }
}
