//! User configuration.
//!
//! Settings come from `<config dir>/buddy/config.json` when it exists and fall
//! back to defaults otherwise. Command-line flags override both in `main`.

use crate::core::dirs::get_config_directory;
use crate::core::error::{BuddyError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "./data/buddy.txt";
pub const DEFAULT_CHEER_FILE: &str = "./data/cheer.txt";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BuddyConfig {
    /// Where tasks are persisted
    pub data_file: PathBuf,
    /// Where `cheer` reads its quotes from
    pub cheer_file: PathBuf,
}

impl Default for BuddyConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cheer_file: PathBuf::from(DEFAULT_CHEER_FILE),
        }
    }
}

impl BuddyConfig {
    /// Load the config from the user's config directory, or defaults if there is none
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join(CONFIG_FILE_NAME);
        Self::load_from(&config_file)
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!(
                "No config file at '{}', using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| BuddyError::config_read_failed(config_file, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| BuddyError::config_parse_failed(config_file, e))?;
        log::debug!("Loaded config from '{}'", config_file.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        cheer_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if let Some(path) = cheer_file {
            self.cheer_file = path;
        }
        self
    }
}
