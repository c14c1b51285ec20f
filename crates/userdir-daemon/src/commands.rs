//! Command implementations for the directory daemon.
//!
//! Handles:
//! - start: Load config, build the directory, start gRPC server
//! - stop: Signal running daemon to stop (via PID file)
//! - status: Check if daemon is running
//! - query: Call the running daemon and print results

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

use userdir_client::UserClient;
use userdir_core::UserDirectory;
use userdir_service::run_server_with_shutdown;
use userdir_types::{SearchCriteria, Settings, User};

use crate::cli::QueryCommands;

/// Get the PID file path
fn pid_file_path() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| {
            #[cfg(unix)]
            {
                dirs.runtime_dir()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| dirs.cache_dir().to_path_buf())
            }
            #[cfg(not(unix))]
            {
                dirs.cache_dir().to_path_buf()
            }
        })
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("user-directory")
        .join("daemon.pid")
}

fn write_pid_file() -> Result<()> {
    let pid_path = pid_file_path();
    if let Some(parent) = pid_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&pid_path, std::process::id().to_string())?;
    info!("Wrote PID file: {:?}", pid_path);
    Ok(())
}

fn remove_pid_file() {
    let pid_path = pid_file_path();
    if pid_path.exists() {
        if let Err(e) = fs::remove_file(&pid_path) {
            warn!("Failed to remove PID file: {}", e);
        } else {
            info!("Removed PID file");
        }
    }
}

fn read_pid_file() -> Option<u32> {
    fs::read_to_string(pid_file_path())
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

#[cfg(unix)]
fn is_process_running(pid: u32) -> bool {
    // Signal 0 only checks that the process exists
    unsafe { libc::kill(pid as i32, 0) == 0 }
}

#[cfg(not(unix))]
fn is_process_running(_pid: u32) -> bool {
    true
}

/// Build the directory from the configured seed file, or the built-in seed.
fn load_directory(settings: &Settings) -> Result<UserDirectory> {
    match settings.expanded_seed_path() {
        Some(path) => UserDirectory::from_json_file(&path)
            .with_context(|| format!("Failed to load seed file {:?}", path)),
        None => {
            info!("No seed file configured, using built-in users");
            Ok(UserDirectory::with_builtin_seed())
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Start the directory daemon.
///
/// 1. Load configuration (defaults -> file -> env -> CLI)
/// 2. Build the directory
/// 3. Start gRPC server
/// 4. On SIGINT/SIGTERM, drain for at most `shutdown_timeout_secs`
pub async fn start_daemon(
    config_path: Option<&str>,
    port_override: Option<u16>,
    seed_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<()> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(port) = port_override {
        settings.grpc_port = port;
    }
    if let Some(seed) = seed_override {
        settings.seed_path = Some(seed.to_string());
    }
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("User directory daemon starting...");
    info!("Configuration:");
    info!("  gRPC address: {}", settings.grpc_addr());
    info!("  Seed file: {:?}", settings.seed_path);
    info!("  Log level: {}", settings.log_level);

    let directory = Arc::new(load_directory(&settings)?);
    info!("Directory loaded with {} users", directory.len());

    let addr: SocketAddr = settings
        .grpc_addr()
        .parse()
        .context("Invalid gRPC address")?;

    write_pid_file()?;

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let server = run_server_with_shutdown(addr, directory, async move {
        let _ = stop_rx.changed().await;
    });
    tokio::pin!(server);

    let grace = Duration::from_secs(settings.shutdown_timeout_secs);
    let result = tokio::select! {
        res = &mut server => res,
        _ = wait_for_shutdown_signal() => {
            let _ = stop_tx.send(true);
            match tokio::time::timeout(grace, &mut server).await {
                Ok(res) => res,
                Err(_) => {
                    warn!("Server did not drain within {:?}, exiting", grace);
                    Ok(())
                }
            }
        }
    };

    remove_pid_file();

    result.map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

/// Stop the running daemon by sending SIGTERM.
pub fn stop_daemon() -> Result<()> {
    let pid = read_pid_file().context("No PID file found - daemon may not be running")?;

    if !is_process_running(pid) {
        remove_pid_file();
        anyhow::bail!("Daemon not running (stale PID file removed)");
    }

    info!("Stopping daemon (PID {})", pid);

    #[cfg(unix)]
    {
        unsafe {
            if libc::kill(pid as i32, libc::SIGTERM) != 0 {
                anyhow::bail!("Failed to send SIGTERM to daemon");
            }
        }
        println!("Sent SIGTERM to daemon (PID {})", pid);
    }

    #[cfg(not(unix))]
    {
        anyhow::bail!("Stop command not yet implemented on this platform");
    }

    Ok(())
}

/// Show daemon status.
pub fn show_status() -> Result<()> {
    let pid_path = pid_file_path();

    match read_pid_file() {
        Some(pid) if is_process_running(pid) => {
            println!("User directory daemon is running (PID {})", pid);
            println!("PID file: {:?}", pid_path);
        }
        Some(pid) => {
            println!(
                "User directory daemon is NOT running (stale PID {} in {:?})",
                pid, pid_path
            );
        }
        None => {
            println!("User directory daemon is NOT running (no PID file)");
        }
    }
    Ok(())
}

/// One-line rendering of a user for CLI output.
pub fn format_user(user: &User) -> String {
    format!(
        "{:>4}  {:<12} {:<6} {:<12} {:>5.2}  {}",
        user.id,
        user.name,
        user.city,
        user.phone,
        user.height,
        if user.married { "married" } else { "single" }
    )
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found");
        return;
    }
    for user in users {
        println!("{}", format_user(user));
    }
    println!("{} user(s)", users.len());
}

/// Run a query subcommand against a running daemon.
pub async fn handle_query(endpoint: &str, command: QueryCommands) -> Result<()> {
    let mut client = UserClient::connect(endpoint)
        .await
        .context("Failed to connect to daemon")?;

    match command {
        QueryCommands::Get { id } => match client.get_user(id).await {
            Ok(user) => println!("{}", format_user(&user)),
            Err(e) if e.is_not_found() => println!("User {} not found", id),
            Err(e) => return Err(e).context("GetUserById failed"),
        },
        QueryCommands::GetMany { ids } => {
            let users = client.get_users(&ids).await.context("GetUsersByIds failed")?;
            print_users(&users);
        }
        QueryCommands::Search {
            city,
            phone,
            married,
        } => {
            let criteria = SearchCriteria {
                city,
                phone,
                married,
            };
            let users = client
                .search(&criteria)
                .await
                .context("SearchUsers failed")?;
            print_users(&users);
        }
    }

    Ok(())
}
