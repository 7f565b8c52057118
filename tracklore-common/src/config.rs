//! Configuration loading and catalog path resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the catalog database file
pub const CATALOG_ENV_VAR: &str = "TRACKLORE_DB";

/// Contents of the optional `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the catalog database file
    pub catalog_path: Option<PathBuf>,
    /// Tracing filter used when RUST_LOG is not set
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Load the config file from the default platform location
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        Self::load_from(&path)
    }

    /// Load a config file from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolve the catalog database path, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. TRACKLORE_DB environment variable
/// 3. `catalog_path` in the TOML config file
/// 4. OS-dependent compiled default (fallback)
///
/// Missing or unreadable config files fall through to the next source;
/// resolution never fails.
pub fn resolve_catalog_path(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Ok(config) = TomlConfig::load() {
        if let Some(path) = config.catalog_path {
            return path;
        }
    }

    // Priority 4: OS-dependent compiled default
    default_catalog_path()
}

/// Find the config file for the platform
///
/// Checks the user config directory first, then `/etc/tracklore` on Linux.
fn config_file_path() -> Result<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("tracklore").join("config.toml")) {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/tracklore/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(Error::Config("No config file found".to_string()))
}

/// OS-dependent default catalog location under the user data directory
pub fn default_catalog_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("tracklore"))
        .unwrap_or_else(|| PathBuf::from("./tracklore_data"))
        .join("catalog.db")
}
