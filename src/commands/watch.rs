//! Watch command: the one-second countdown loop.
//!
//! By default the watcher runs as a detached background process that raises
//! threshold alerts; `--foreground` keeps it attached with a live countdown
//! line, and `--stop` terminates a running background watcher.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher
    #[arg(long, short)]
    stop: bool,

    /// Run in the foreground with a live countdown line
    #[arg(long, short)]
    foreground: bool,

    /// Internal flag marking the detached child process
    #[arg(long, hide = true)]
    daemon_run: bool,
}

/// Executes the watch command.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground || args.daemon_run {
        // The loop is the long-lived surface, so the tracing subscriber is
        // installed here rather than at process startup.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .try_init();
        return daemon::run_with_signal_handling(args.foreground).await;
    }

    daemon::spawn()
}
