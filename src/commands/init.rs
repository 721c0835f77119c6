//! Application configuration initialization command.
//!
//! Provides the interactive setup wizard that walks through the shift
//! window, the break slots and the alert thresholds.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    // Run the interactive configuration wizard and persist the result
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
