pub mod breaks;
pub mod init;
pub mod schedule;
pub mod status;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the current countdown")]
    Status,
    #[command(about = "Show the resolved shift window and its breaks")]
    Schedule,
    #[command(about = "Start, stop or inspect a manual break")]
    Break(breaks::BreakArgs),
    #[command(about = "Watch the schedule and raise countdown alerts")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Schedule => schedule::cmd(),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
