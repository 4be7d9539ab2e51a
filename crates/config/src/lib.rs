//! Marquee Configuration System
//!
//! Settings are read from an optional TOML file. Every section has defaults,
//! so a partial file (or no file at all) yields a complete configuration.
//!
//! # Architecture
//!
//! - **Trait-based**: Each section implements `ConfigSection`
//! - **Graceful degradation**: Invalid values are reported as warnings on load
//! - **Atomic writes**: Config files are never left half-written
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_config::{Config, ConfigManager};
//!
//! let manager = ConfigManager::with_path("marquee.toml".into());
//! let config = manager.load()?;
//! println!("Catalog: {}", config.catalog.data_file.display());
//! # Ok::<(), marquee_config::ConfigError>(())
//! ```

mod error;
mod manager;
mod persistence;
mod validation;

// Config sections
pub mod app_config;
mod catalog_config;
mod display_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{ConfigManager, CONFIG_FILE_NAME};
pub use validation::{ConfigSection, Validator};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use catalog_config::CatalogConfig;
pub use display_config::DisplayConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Application-level settings
    pub app: AppConfig,

    /// Catalog file settings
    pub catalog: CatalogConfig,

    /// Output preferences
    pub display: DisplayConfig,
}

impl Config {
    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.catalog.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.display.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            app: AppConfig::default(),
            catalog: CatalogConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}
