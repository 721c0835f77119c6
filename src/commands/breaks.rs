//! Manual break control command.
//!
//! This command is the owning surface of the active break flag: it starts a
//! break for a slot, stops the running one, and reports elapsed and
//! remaining time. The countdown core only ever reads the flag.

use crate::libs::active_break::ActiveBreakStore;
use crate::libs::breaks::BreakKey;
use crate::libs::config::{BreaksConfig, Config};
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::{Args, Subcommand};

/// Command-line arguments for the break command.
#[derive(Debug, Args)]
pub struct BreakArgs {
    #[command(subcommand)]
    action: BreakAction,
}

#[derive(Debug, Subcommand)]
enum BreakAction {
    #[command(about = "Start a manual break")]
    Start {
        #[arg(value_enum, default_value_t = BreakKey::Break1, help = "Break slot to start")]
        slot: BreakKey,
    },
    #[command(about = "Stop the running break")]
    Stop,
    #[command(about = "Show the running break")]
    Status,
}

/// Executes the break command.
pub fn cmd(args: BreakArgs) -> Result<()> {
    let breaks = Config::read()?.breaks.unwrap_or_default();
    let store = ActiveBreakStore::new()?;

    match args.action {
        BreakAction::Start { slot } => start(&store, &breaks, slot),
        BreakAction::Stop => stop(&store),
        BreakAction::Status => status(&store, &breaks),
    }
}

fn start(store: &ActiveBreakStore, breaks: &BreaksConfig, slot: BreakKey) -> Result<()> {
    let now = Local::now().naive_local();

    if let Some(state) = store.read()? {
        let duration = slot_duration(breaks, state.key);
        let elapsed = now - state.started_at;
        if elapsed < duration {
            msg_warning!(Message::BreakAlreadyActive(state.key.to_string(), format_countdown(&(duration - elapsed))));
            return Ok(());
        }
        // A stale flag from an expired break; replace it.
        store.clear()?;
    }

    store.start(slot)?;
    msg_success!(Message::BreakStarted(slot.to_string(), breaks.slot(slot).duration_secs / 60));
    Ok(())
}

fn stop(store: &ActiveBreakStore) -> Result<()> {
    match store.read()? {
        None => msg_info!(Message::NoActiveBreak),
        Some(state) => {
            store.clear()?;
            let elapsed = Local::now().naive_local() - state.started_at;
            msg_success!(Message::BreakStopped(state.key.to_string(), format_countdown(&elapsed)));
        }
    }
    Ok(())
}

fn status(store: &ActiveBreakStore, breaks: &BreaksConfig) -> Result<()> {
    match store.read()? {
        None => msg_info!(Message::NoActiveBreak),
        Some(state) => {
            let duration = slot_duration(breaks, state.key);
            let elapsed = Local::now().naive_local() - state.started_at;
            if elapsed < duration {
                msg_print!(Message::BreakStatusLine(
                    state.key.to_string(),
                    format_countdown(&elapsed),
                    format_countdown(&(duration - elapsed)),
                ));
            } else {
                msg_warning!(Message::BreakExpired(state.key.to_string()));
            }
        }
    }
    Ok(())
}

fn slot_duration(breaks: &BreaksConfig, key: BreakKey) -> Duration {
    Duration::seconds(breaks.slot(key).duration_secs as i64)
}
