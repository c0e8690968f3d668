//! Credential profile configuration.
//!
//! Default config location: ~/.config/redsync/config.toml, overridable via
//! the REDSYNC_CONFIG environment variable. Each profile holds the script
//! app credentials for one account:
//!
//! ```toml
//! [profiles.default]
//! client_id = "..."
//! client_secret = "..."
//! username = "alice"
//! password = "..."
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// Script-app credentials for one account.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    /// Overrides the built-in `script:redsync:<version>` user agent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Config {
    /// Resolve the config file location.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("REDSYNC_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let base = dirs::config_dir()
            .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))?;
        Ok(base.join("redsync").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&text)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| Error::Config(format!("no profile named '{}' in config", name)))
    }
}
