//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target sink settings
    #[serde(default)]
    pub sink: SinkConfig,
    /// Link-job tunables
    #[serde(default)]
    pub link: LinkConfig,
}

/// Target sink settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SinkConfig {
    /// Stable `node.name` of the RAOP sink to link to. Required at run
    /// time unless given on the command line; there is no default.
    pub name: Option<String>,
}

/// Link-job tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Seconds to wait after the readiness check so freshly initialized
    /// audio devices show up in the graph
    #[serde(default = "default_settle_delay_secs")]
    pub settle_delay_secs: u64,
    /// Bound on a single pw-cli/pw-link invocation, in seconds
    #[serde(default = "default_command_timeout_secs")]
    pub command_timeout_secs: u64,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            settle_delay_secs: default_settle_delay_secs(),
            command_timeout_secs: default_command_timeout_secs(),
        }
    }
}

fn default_settle_delay_secs() -> u64 {
    5
}

fn default_command_timeout_secs() -> u64 {
    10
}

/// Load configuration from the given path, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {config_path:?}"))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {config_path:?}"))?;
        Ok(config)
    } else {
        info!(?config_path, "Config file not found, using defaults");
        Ok(Config::default())
    }
}

/// Get the default configuration file path.
fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "raoplink", "Raoplink")
        .context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[sink]\nname = \"MySink\"\n\n[link]\nsettle_delay_secs = 0\ncommand_timeout_secs = 3\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.sink.name.as_deref(), Some("MySink"));
        assert_eq!(config.link.settle_delay_secs, 0);
        assert_eq!(config.link.command_timeout_secs, 3);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sink]\nname = \"MySink\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.sink.name.as_deref(), Some("MySink"));
        assert_eq!(config.link.settle_delay_secs, 5);
        assert_eq!(config.link.command_timeout_secs, 10);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.sink.name.is_none());
        assert_eq!(config.link.settle_delay_secs, 5);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sink\nname =").unwrap();

        assert!(load_config(Some(&path)).is_err());
    }
}
