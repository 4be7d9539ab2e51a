//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigResult};
use std::path::{Path, PathBuf};

/// Default file name for `marquee init-config`
pub const CONFIG_FILE_NAME: &str = "marquee.toml";

/// Loads, saves and initializes one config file
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            persistence: ConfigPersistence::new(config_path),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.persistence.path()
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Saves the configuration to file
    ///
    /// Validates before saving and writes atomically.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }

    /// Writes a default config file if one doesn't exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn initialize(&self) -> ConfigResult<bool> {
        if self.config_path().exists() {
            log::info!(
                "Config file already exists at {}",
                self.config_path().display()
            );
            return Ok(false);
        }

        self.save(&Config::default())?;
        Ok(true)
    }
}
