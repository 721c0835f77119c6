//! Manual break state, owned by the break-control surface.
//!
//! The stored flag records which slot was started and when. The countdown
//! core only ever reads it; the `break` command (and the watch loop, on
//! natural expiry) are the writers. Keeping the state in a file rather than
//! in memory lets the watcher and the CLI commands share it across
//! processes.

use crate::libs::breaks::BreakKey;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const ACTIVE_BREAK_FILE: &str = "active-break.json";

/// Records that a break has been started manually.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ActiveBreakState {
    pub key: BreakKey,
    pub started_at: NaiveDateTime,
}

/// File-backed store for the active break flag.
pub struct ActiveBreakStore {
    path: PathBuf,
}

impl ActiveBreakStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: DataStorage::new().get_path(ACTIVE_BREAK_FILE)?,
        })
    }

    /// Reads the current state.
    ///
    /// A missing file means no break is running; a corrupt file is treated
    /// the same way rather than surfacing an error into every tick.
    pub fn read(&self) -> Result<Option<ActiveBreakState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw).ok())
    }

    /// Records a break started now for the given slot.
    pub fn start(&self, key: BreakKey) -> Result<ActiveBreakState> {
        let state = ActiveBreakState {
            key,
            started_at: Local::now().naive_local(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&state)?)?;
        Ok(state)
    }

    /// Clears any stored state.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
