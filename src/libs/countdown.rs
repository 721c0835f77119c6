//! Countdown state derivation.
//!
//! One evaluation per tick: resolve the shift window, project the breaks
//! into it and derive the display state by priority. The evaluation is a
//! pure function of `(config, active break, now)` with no hidden state and
//! no clock access, so every display surface shares the exact same
//! arithmetic and the whole chain is testable without a timer.
//!
//! Priority order, first match wins:
//!
//! 1. A running manual break ("Break left ...")
//! 2. No shift configured: nearest raw break time today or tomorrow
//! 3. Before the shift starts ("Next shift in ...")
//! 4. After the shift ends ("Next shift in ...", daily recurrence assumed)
//! 5. A future break inside the shift ("Next break in ...")
//! 6. The remainder of the shift ("Shift ends in ...")

use crate::libs::active_break::ActiveBreakState;
use crate::libs::breaks::{self, BreakKey};
use crate::libs::config::{BreaksConfig, Config};
use crate::libs::formatter::format_countdown;
use crate::libs::schedule::{self, parse_time_lenient};
use chrono::{Duration, NaiveDateTime};

/// Which rule produced the current countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A manually started break is still running.
    OnBreak(BreakKey),
    /// Counting down to the start of the next shift occurrence.
    NextShift,
    /// Counting down to the next break, in-shift or via the raw-time
    /// fallback when no shift is configured.
    NextBreak(BreakKey),
    /// Counting down to the end of the current shift.
    ShiftEnd,
    /// Nothing is configured; there is nothing to count down to.
    Idle,
}

/// The derived display state for one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    pub phase: Phase,
    /// Ready-to-render display line; empty when idle.
    pub text: String,
    /// The instant being counted down to.
    pub target: Option<NaiveDateTime>,
    /// Whole seconds until `target`, clamped at zero.
    pub remaining_secs: i64,
    /// Set when the active break has outlived its configured duration. The
    /// owning surface is expected to clear the stored state; this module
    /// never does.
    pub expired_break: Option<BreakKey>,
}

impl Countdown {
    fn idle(expired_break: Option<BreakKey>) -> Self {
        Self {
            phase: Phase::Idle,
            text: String::new(),
            target: None,
            remaining_secs: 0,
            expired_break,
        }
    }

    fn at(phase: Phase, label: &str, target: NaiveDateTime, now: NaiveDateTime, expired_break: Option<BreakKey>) -> Self {
        let remaining = target - now;
        Self {
            phase,
            text: format!("{} {}", label, format_countdown(&remaining)),
            target: Some(target),
            remaining_secs: remaining.num_seconds().max(0),
            expired_break,
        }
    }

    /// Whole minutes left until the target; alert thresholds are expressed
    /// in this unit.
    pub fn remaining_minutes(&self) -> i64 {
        self.remaining_secs / 60
    }
}

/// Derives the countdown state for `now`.
pub fn evaluate(config: &Config, active: Option<&ActiveBreakState>, now: NaiveDateTime) -> Countdown {
    let breaks_config = config.breaks.clone().unwrap_or_default();

    // Rule 1: a running manual break overrides every other display. Once it
    // outlives its duration it stops being displayed, but clearing the
    // stored flag stays with the owning surface.
    let mut expired_break = None;
    if let Some(state) = active {
        let duration = Duration::seconds(breaks_config.slot(state.key).duration_secs as i64);
        let ends_at = state.started_at + duration;
        if now < ends_at {
            return Countdown::at(Phase::OnBreak(state.key), "Break left", ends_at, now, None);
        }
        expired_break = Some(state.key);
    }

    let shift_config = config.shift.clone().unwrap_or_default();
    let Some(occurrence) = schedule::resolve_shift_window(&shift_config, now) else {
        // Rule 2: no shift window; count to the nearest raw break time
        // today or tomorrow, ignoring shift containment.
        return match next_raw_break(&breaks_config, now) {
            Some((key, target)) => Countdown::at(Phase::NextBreak(key), "Next break in", target, now, expired_break),
            None => Countdown::idle(expired_break),
        };
    };

    // Rule 3: before the shift begins.
    if now < occurrence.start {
        return Countdown::at(Phase::NextShift, "Next shift in", occurrence.start, now, expired_break);
    }

    // Rule 4: after the shift has ended. Daily recurrence is assumed: the
    // next start is extrapolated one calendar day ahead instead of
    // re-running the resolver. The resolver already hands out a future
    // occurrence in this situation, so the branch only fires for callers
    // evaluating against a stale occurrence.
    if now > occurrence.end {
        return Countdown::at(Phase::NextShift, "Next shift in", occurrence.start + Duration::days(1), now, expired_break);
    }

    let projected = breaks::project_breaks(&breaks_config, &occurrence);

    // Rule 5: a future break inside this shift.
    if let Some(next) = breaks::next_break_after(&projected, now) {
        return Countdown::at(Phase::NextBreak(next.key), "Next break in", next.start, now, expired_break);
    }

    // Rule 6: ride out the rest of the shift.
    Countdown::at(Phase::ShiftEnd, "Shift ends in", occurrence.end, now, expired_break)
}

/// Nearest configured break time today or tomorrow, ignoring shift windows.
///
/// Ties between slots go to the lowest-numbered one.
fn next_raw_break(breaks: &BreaksConfig, now: NaiveDateTime) -> Option<(BreakKey, NaiveDateTime)> {
    BreakKey::ALL
        .iter()
        .filter_map(|&key| {
            let time = breaks.slot(key).time.as_deref().and_then(parse_time_lenient)?;
            let mut candidate = now.date().and_time(time);
            if candidate <= now {
                candidate += Duration::days(1);
            }
            Some((key, candidate))
        })
        .min_by_key(|(_, start)| *start)
}
