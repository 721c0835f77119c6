//! Core library modules for the shiftwatch application.
//!
//! The schedule computation core is pure and timer-free: `schedule` resolves
//! the active or upcoming shift window, `breaks` projects the configured
//! break slots into it, and `countdown` derives the display state for one
//! instant. Everything else is the surface around that core: configuration,
//! the watch loop, alerting, and console output.

pub mod active_break;
pub mod breaks;
pub mod config;
pub mod countdown;
pub mod daemon;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod notify;
pub mod schedule;
pub mod ticker;
pub mod view;
pub mod watcher;
