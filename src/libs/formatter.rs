//! Time formatting utilities for user-friendly display.
//!
//! Two formats are used throughout the application: "HH:MM" for schedule
//! durations (break lengths, shift lengths) and "HH:MM:SS" for live
//! countdowns. Both clamp negative values to zero and leave hours unbounded,
//! so a countdown past 24 hours renders as e.g. "30:00:00" rather than
//! wrapping.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A break occurrence pre-formatted for table display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedBreak {
    /// The slot the break came from ("break1".."break3").
    pub slot: String,
    /// Formatted start time (e.g. "11:00").
    pub start: String,
    /// Formatted end time (e.g. "11:15").
    pub end: String,
    /// Formatted duration (e.g. "00:15").
    pub duration: String,
}

/// Formats a duration as zero-padded "HH:MM".
///
/// Seconds are truncated, negative values render as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a remaining-time value as zero-padded "HH:MM:SS".
///
/// Sub-second remainders are truncated and negative values clamp to
/// "00:00:00".
pub fn format_countdown(remaining: &Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
