//! Display implementation for shiftwatch application messages.
//!
//! All user-facing text lives in this single `Display` impl so wording stays
//! consistent across commands and the watch loop, and parameter interpolation
//! stays type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleShift => "Shift schedule".to_string(),
            Message::ConfigModuleBreaks => "Break slots".to_string(),
            Message::ConfigModuleNotify => "Alert thresholds".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptShiftStart => "Shift start (HH:MM, empty to disable)".to_string(),
            Message::PromptShiftEnd => "Shift end (HH:MM, empty for the 9-hour default)".to_string(),
            Message::PromptBreakTime(slot) => format!("{} start (HH:MM, empty to disable)", slot),
            Message::PromptBreakDuration(slot) => format!("{} duration in minutes", slot),
            Message::PromptBreakWarnMinutes => "Warn before breaks (minutes, comma-separated)".to_string(),
            Message::PromptShiftEndWarnMinutes => "Warn before shift end (minutes, comma-separated)".to_string(),
            Message::InvalidTimeOfDay => "Expected a time of day as HH:MM".to_string(),

            // === SCHEDULE MESSAGES ===
            Message::ShiftNotConfigured => "No shift is configured. Run 'shiftwatch init' to set one up.".to_string(),
            Message::NothingScheduled => "Nothing to count down to: no shift or break times are configured.".to_string(),
            Message::ShiftWindowHeader(start, end) => format!("Shift window: {} - {}", start, end),
            Message::NoBreaksInShift => "No breaks fall inside this shift window.".to_string(),

            // === BREAK CONTROL MESSAGES ===
            Message::BreakStarted(slot, minutes) => format!("Started {} ({} min)", slot, minutes),
            Message::BreakAlreadyActive(slot, remaining) => {
                format!("{} is already running with {} left. Stop it first.", slot, remaining)
            }
            Message::BreakStopped(slot, elapsed) => format!("Stopped {} after {}", slot, elapsed),
            Message::BreakExpired(slot) => format!("{} has used up its configured duration", slot),
            Message::BreakStatusLine(slot, elapsed, remaining) => {
                format!("{}: {} elapsed, {} left", slot, elapsed, remaining)
            }
            Message::NoActiveBreak => "No break is currently running.".to_string(),

            // === ALERT MESSAGES ===
            Message::BreakStartingSoon(minutes) => format!("Next break starts in {} minutes", minutes),
            Message::ShiftEndingSoon(minutes) => format!("Shift ends in {} minutes", minutes),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running.".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher with PID: {}", pid),
            Message::WatcherFailedToStopExisting(error) => format!("Failed to stop existing watcher: {}", error),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Signal handling not supported on this platform".to_string(),
            Message::WatchShuttingDown => "Shutting down watch loop...".to_string(),
            Message::WatchExitedNormally => "Watch loop exited".to_string(),

            // === PROCESS MESSAGES ===
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::DaemonModeNotSupported => "Background mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToOpenProcess(error) => format!("Failed to open process: error {}", error),
            Message::FailedToTerminateProcess(error) => format!("Failed to terminate process: error {}", error),
        };
        write!(f, "{}", text)
    }
}
