//! Display the resolved shift window and its projected breaks.

use crate::libs::breaks::{project_breaks, BreakGroup};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::schedule::resolve_shift_window;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

/// Resolves the current or upcoming shift occurrence and prints its break
/// table.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let now = Local::now().naive_local();

    let Some(occurrence) = resolve_shift_window(&config.shift.clone().unwrap_or_default(), now) else {
        msg_info!(Message::ShiftNotConfigured);
        return Ok(());
    };

    msg_print!(
        Message::ShiftWindowHeader(
            occurrence.start.format("%Y-%m-%d %H:%M").to_string(),
            occurrence.end.format("%Y-%m-%d %H:%M").to_string(),
        ),
        true
    );

    let projected = project_breaks(&config.breaks.clone().unwrap_or_default(), &occurrence);
    if projected.is_empty() {
        msg_info!(Message::NoBreaksInShift);
        return Ok(());
    }

    View::breaks(&projected.format())?;
    Ok(())
}
