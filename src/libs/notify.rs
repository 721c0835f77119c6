//! One-shot threshold alerts for upcoming transitions.
//!
//! The countdown core only exposes the remaining whole-minute count; when to
//! alert and how often is host policy, implemented here and driven by the
//! watch loop. Each configured threshold fires once per countdown target:
//! keying on the target timestamp both suppresses repeats within the same
//! minute and re-arms the tracker when the countdown moves on to the next
//! occurrence.

use crate::libs::config::NotifyConfig;
use crate::libs::countdown::{Countdown, Phase};
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// An alert due for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    BreakSoon { minutes: i64 },
    ShiftEndSoon { minutes: i64 },
}

/// Tracks which (target, threshold) pairs have already fired.
#[derive(Debug, Default)]
pub struct AlertTracker {
    fired: HashSet<(NaiveDateTime, i64)>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alert due for this countdown state, at most once per
    /// threshold per target.
    pub fn check(&mut self, thresholds: &NotifyConfig, countdown: &Countdown) -> Option<Alert> {
        let target = countdown.target?;
        let minutes = countdown.remaining_minutes();

        let alert = match countdown.phase {
            Phase::NextBreak(_) if thresholds.break_warn_minutes.contains(&minutes) => Alert::BreakSoon { minutes },
            Phase::ShiftEnd if thresholds.shift_end_warn_minutes.contains(&minutes) => Alert::ShiftEndSoon { minutes },
            _ => return None,
        };

        if self.fired.insert((target, minutes)) {
            Some(alert)
        } else {
            None
        }
    }
}
