//! Catalog file configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the movie catalog lives and how a missing file is handled
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the comma-separated catalog file
    pub data_file: PathBuf,

    /// Write the sample catalog when the file does not exist
    pub bootstrap_if_missing: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("movies.csv"),
            bootstrap_if_missing: true,
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![Validator::not_empty(
            &self.data_file.to_string_lossy(),
            "catalog.data_file",
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data_file, PathBuf::from("movies.csv"));
        assert!(config.bootstrap_if_missing);
    }

    #[test]
    fn test_empty_data_file() {
        let mut config = CatalogConfig::default();
        config.data_file = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
