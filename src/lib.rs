//! # Shiftwatch - Shift & Break Countdown
//!
//! A command-line companion for support agents working recurring daily
//! shifts with scheduled breaks.
//!
//! ## Features
//!
//! - **Shift Windows**: Resolves the concrete shift interval for any instant,
//!   including shifts that cross midnight
//! - **Break Projection**: Places up to three daily breaks inside the
//!   resolved shift occurrence
//! - **Live Countdown**: A one-second watch loop that renders the current
//!   countdown ("Next break in", "Break left", "Shift ends in")
//! - **Manual Breaks**: Start and stop breaks by slot; the watcher clears
//!   them when they naturally expire
//! - **Alerts**: Configurable one-shot warnings ahead of breaks and shift end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftwatch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
