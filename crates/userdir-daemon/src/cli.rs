//! CLI argument parsing for the directory daemon.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand};

use userdir_client::DEFAULT_ENDPOINT;

/// User Directory Daemon
///
/// Serves a read-only directory of user records over gRPC.
#[derive(Parser, Debug)]
#[command(name = "userdir-daemon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/user-directory/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Daemon commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the directory daemon in the foreground
    Start {
        /// Override gRPC port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override seed file (JSON array of users)
        #[arg(long)]
        seed: Option<String>,
    },

    /// Stop the running daemon
    Stop,

    /// Show daemon status
    Status,

    /// Query the directory
    Query {
        /// gRPC endpoint (default: http://[::1]:50051)
        #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        #[command(subcommand)]
        command: QueryCommands,
    },
}

/// Query subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommands {
    /// Fetch one user by id
    Get {
        /// User id
        id: i32,
    },

    /// Fetch several users, in the order given
    GetMany {
        /// User ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i32>,
    },

    /// Search users by optional criteria
    Search {
        /// Match on city
        #[arg(long)]
        city: Option<String>,

        /// Match on phone number
        #[arg(long)]
        phone: Option<i64>,

        /// Match on marital status (true or false)
        #[arg(long)]
        married: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_start_with_port() {
        let cli = Cli::parse_from(["userdir-daemon", "start", "-p", "9999"]);
        match cli.command {
            Commands::Start { port, .. } => assert_eq!(port, Some(9999)),
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_start_with_seed() {
        let cli = Cli::parse_from(["userdir-daemon", "start", "--seed", "/srv/users.json"]);
        match cli.command {
            Commands::Start { seed, port } => {
                assert_eq!(seed, Some("/srv/users.json".to_string()));
                assert_eq!(port, None);
            }
            _ => panic!("Expected Start command"),
        }
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["userdir-daemon", "--config", "/path/to/config.toml", "start"]);
        assert_eq!(cli.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_cli_with_log_level() {
        let cli = Cli::parse_from(["userdir-daemon", "--log-level", "debug", "start"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_status_and_stop() {
        let cli = Cli::parse_from(["userdir-daemon", "status"]);
        assert!(matches!(cli.command, Commands::Status));

        let cli = Cli::parse_from(["userdir-daemon", "stop"]);
        assert!(matches!(cli.command, Commands::Stop));
    }

    #[test]
    fn test_cli_query_get() {
        let cli = Cli::parse_from(["userdir-daemon", "query", "get", "3"]);
        match cli.command {
            Commands::Query { endpoint, command } => {
                assert_eq!(endpoint, "http://[::1]:50051");
                assert!(matches!(command, QueryCommands::Get { id: 3 }));
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_cli_query_get_many_keeps_order() {
        let cli = Cli::parse_from(["userdir-daemon", "query", "get-many", "3", "1", "3"]);
        match cli.command {
            Commands::Query {
                command: QueryCommands::GetMany { ids },
                ..
            } => assert_eq!(ids, vec![3, 1, 3]),
            _ => panic!("Expected GetMany command"),
        }
    }

    #[test]
    fn test_cli_query_get_many_requires_ids() {
        let result = Cli::try_parse_from(["userdir-daemon", "query", "get-many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_query_search() {
        let cli = Cli::parse_from([
            "userdir-daemon",
            "query",
            "-e",
            "http://localhost:6000",
            "search",
            "--city",
            "LA",
            "--married",
            "false",
        ]);
        match cli.command {
            Commands::Query {
                endpoint,
                command:
                    QueryCommands::Search {
                        city,
                        phone,
                        married,
                    },
            } => {
                assert_eq!(endpoint, "http://localhost:6000");
                assert_eq!(city, Some("LA".to_string()));
                assert_eq!(phone, None);
                assert_eq!(married, Some(false));
            }
            _ => panic!("Expected Search command"),
        }
    }
}
