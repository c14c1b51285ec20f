//! User Directory Daemon
//!
//! Serves a read-only directory of user records over gRPC.
//!
//! # Usage
//!
//! ```bash
//! userdir-daemon start [--port PORT] [--seed PATH]
//! userdir-daemon stop
//! userdir-daemon status
//! userdir-daemon query get 1
//! userdir-daemon query search --city LA --married false
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/user-directory/config.toml)
//! 3. Environment variables (USERDIR_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use userdir_daemon::{handle_query, show_status, start_daemon, stop_daemon, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start { port, seed } => {
            start_daemon(
                cli.config.as_deref(),
                port,
                seed.as_deref(),
                cli.log_level.as_deref(),
            )
            .await?;
        }
        Commands::Stop => {
            stop_daemon()?;
        }
        Commands::Status => {
            show_status()?;
        }
        Commands::Query { endpoint, command } => {
            handle_query(&endpoint, command).await?;
        }
    }

    Ok(())
}
