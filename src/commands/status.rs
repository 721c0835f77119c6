//! One-shot countdown display command.

use crate::libs::active_break::ActiveBreakStore;
use crate::libs::config::Config;
use crate::libs::countdown;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

/// Evaluates the countdown for the current instant and prints it.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let active = ActiveBreakStore::new()?.read()?;
    let now = Local::now().naive_local();

    let countdown = countdown::evaluate(&config, active.as_ref(), now);
    if countdown.text.is_empty() {
        msg_info!(Message::NothingScheduled);
    } else {
        msg_print!(countdown.text);
    }
    Ok(())
}
