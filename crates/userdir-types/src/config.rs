//! Configuration loading for the user directory.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! Default config file lives at ~/.config/user-directory/config.toml.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DirectoryError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// gRPC server port
    #[serde(default = "default_grpc_port")]
    pub grpc_port: u16,

    /// gRPC server host
    #[serde(default = "default_grpc_host")]
    pub grpc_host: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional JSON seed file. The built-in seed is used when unset.
    #[serde(default)]
    pub seed_path: Option<String>,

    /// How long in-flight requests may drain after a shutdown signal
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

fn default_grpc_port() -> u16 {
    50051
}

fn default_grpc_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_shutdown_timeout_secs() -> u64 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grpc_port: default_grpc_port(),
            grpc_host: default_grpc_host(),
            log_level: default_log_level(),
            seed_path: None,
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/user-directory/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (USERDIR_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, DirectoryError> {
        let config_dir = ProjectDirs::from("", "", "user-directory")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("grpc_port", default_grpc_port() as i64)
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default("grpc_host", default_grpc_host())
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .set_default(
                "shutdown_timeout_secs",
                default_shutdown_timeout_secs() as i64,
            )
            .map_err(|e| DirectoryError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // USERDIR_GRPC_PORT, USERDIR_SEED_PATH, ...
        builder = builder.add_source(
            Environment::with_prefix("USERDIR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| DirectoryError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Get the socket address for the gRPC server
    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.grpc_host, self.grpc_port)
    }

    /// Seed file path with a leading `~/` expanded
    pub fn expanded_seed_path(&self) -> Option<PathBuf> {
        let raw = self.seed_path.as_deref()?;
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = directories::BaseDirs::new() {
                return Some(home.home_dir().join(rest));
            }
        }
        Some(PathBuf::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.grpc_port, 50051);
        assert_eq!(settings.grpc_host, "0.0.0.0");
        assert_eq!(settings.log_level, "info");
        assert!(settings.seed_path.is_none());
        assert_eq!(settings.shutdown_timeout_secs, 5);
    }

    #[test]
    fn test_grpc_addr() {
        let settings = Settings::default();
        assert_eq!(settings.grpc_addr(), "0.0.0.0:50051");
    }

    #[test]
    fn test_load_from_cli_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "grpc_port = 6000").unwrap();
        writeln!(file, "seed_path = \"/srv/users.json\"").unwrap();

        let settings = Settings::load(Some(&file.path().to_string_lossy())).unwrap();
        assert_eq!(settings.grpc_port, 6000);
        assert_eq!(settings.seed_path.as_deref(), Some("/srv/users.json"));
    }

    #[test]
    fn test_load_missing_cli_config_fails() {
        let result = Settings::load(Some("/definitely/not/here/userdir.toml"));
        assert!(matches!(result, Err(DirectoryError::Config(_))));
    }

    #[test]
    fn test_expanded_seed_path() {
        let mut settings = Settings::default();
        assert!(settings.expanded_seed_path().is_none());

        settings.seed_path = Some("/abs/users.json".to_string());
        assert_eq!(
            settings.expanded_seed_path(),
            Some(PathBuf::from("/abs/users.json"))
        );

        settings.seed_path = Some("~/users.json".to_string());
        let expanded = settings.expanded_seed_path().unwrap();
        assert!(expanded.ends_with("users.json"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
