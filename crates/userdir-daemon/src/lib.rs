//! User directory daemon library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (start, stop, status, query)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, QueryCommands};
pub use commands::{format_user, handle_query, show_status, start_daemon, stop_daemon};
