//! Configuration for mapd
//!
//! Stored as `config.toml` in the data directory. Every field has a default,
//! so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::checklist::DEFAULT_HOME_COUNTRY;
use crate::error::{MapdError, Result};

/// File name of the configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

const DATA_DIR: &str = "mapd";
const DATA_DIR_ENV_VAR: &str = "MAPD_DATA_DIR";

/// Blob keys the record store reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobKeys {
    #[serde(default = "default_profile_key")]
    pub profile: String,
    #[serde(default = "default_first_launch_key")]
    pub first_launch: String,
}

fn default_profile_key() -> String {
    "profile".to_string()
}

fn default_first_launch_key() -> String {
    "first-launch".to_string()
}

impl Default for BlobKeys {
    fn default() -> Self {
        Self {
            profile: default_profile_key(),
            first_launch: default_first_launch_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapdConfig {
    /// Trips outside this country get a visa checklist item
    #[serde(default = "default_home_country")]
    pub home_country: String,
    /// Default size of the "recent places" list
    #[serde(default = "default_recent_places_limit")]
    pub recent_places_limit: usize,
    #[serde(default)]
    pub keys: BlobKeys,
}

fn default_home_country() -> String {
    DEFAULT_HOME_COUNTRY.to_string()
}

fn default_recent_places_limit() -> usize {
    3
}

impl Default for MapdConfig {
    fn default() -> Self {
        Self {
            home_country: default_home_country(),
            recent_places_limit: default_recent_places_limit(),
            keys: BlobKeys::default(),
        }
    }
}

impl MapdConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| MapdError::io_operation("read config", path.display(), e))?;
        let config: MapdConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `config.toml` from `data_dir`, falling back to defaults when absent
    pub fn load_or_default(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MapdError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| MapdError::io_operation("create directory", parent.display(), e))?;
        }
        fs::write(path, content)
            .map_err(|e| MapdError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

/// Resolve the data directory: explicit path, then `MAPD_DATA_DIR`, then the
/// platform data directory (`~/.local/share/mapd` on Linux)
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Ok(env_dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !env_dir.is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join(DATA_DIR))
        .ok_or_else(|| MapdError::NoDataDir {
            search_root: PathBuf::from("~"),
        })
}
