//! Per-tick evaluation loop behind the watch command.
//!
//! Each tick re-reads configuration and the active break flag, evaluates the
//! countdown and applies the host-side effects: clearing a naturally expired
//! break, firing one-shot threshold alerts, and (in foreground mode)
//! rendering the countdown line in place.

use crate::libs::active_break::ActiveBreakStore;
use crate::libs::config::Config;
use crate::libs::countdown::{self, Countdown};
use crate::libs::messages::Message;
use crate::libs::notify::{Alert, AlertTracker};
use crate::libs::ticker::TickFlow;
use crate::{msg_debug, msg_info, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{self, Write};

pub struct Watcher {
    store: ActiveBreakStore,
    tracker: AlertTracker,
    foreground: bool,
    // Width of the countdown line currently on screen, for clean rewrites.
    line_width: usize,
}

impl Watcher {
    pub fn new(foreground: bool) -> Result<Self> {
        Ok(Watcher {
            store: ActiveBreakStore::new()?,
            tracker: AlertTracker::new(),
            foreground,
            line_width: 0,
        })
    }

    /// One evaluation pass.
    ///
    /// Configuration is re-read on every tick so settings edits take effect
    /// without restarting the watcher; a transient read failure skips the
    /// tick instead of killing the loop.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickFlow {
        let config = match Config::read() {
            Ok(config) => config,
            Err(e) => {
                msg_debug!(format!("config read failed: {}", e));
                return TickFlow::Continue;
            }
        };
        let active = self.store.read().unwrap_or(None);
        let countdown = countdown::evaluate(&config, active.as_ref(), now);

        if let Some(key) = countdown.expired_break {
            // The countdown only reports expiry; clearing the flag is this
            // surface's job.
            if self.store.clear().is_ok() {
                self.clear_line();
                msg_info!(Message::BreakExpired(key.to_string()));
            }
        }

        let thresholds = config.notify.unwrap_or_default();
        if let Some(alert) = self.tracker.check(&thresholds, &countdown) {
            let message = match alert {
                Alert::BreakSoon { minutes } => Message::BreakStartingSoon(minutes),
                Alert::ShiftEndSoon { minutes } => Message::ShiftEndingSoon(minutes),
            };
            self.clear_line();
            if self.foreground {
                // Terminal bell alongside the visible alert.
                print!("\x07");
            }
            msg_warning!(message);
        }

        if self.foreground {
            self.render(&countdown);
        }
        TickFlow::Continue
    }

    /// Rewrites the countdown line in place.
    fn render(&mut self, countdown: &Countdown) {
        let width = self.line_width.max(countdown.text.len());
        print!("\r{:<width$}", countdown.text, width = width);
        io::stdout().flush().ok();
        self.line_width = countdown.text.len();
    }

    /// Clears the in-place countdown line before printing a full message.
    fn clear_line(&mut self) {
        if self.foreground && self.line_width > 0 {
            print!("\r{:width$}\r", "", width = self.line_width);
            io::stdout().flush().ok();
            self.line_width = 0;
        }
    }
}
