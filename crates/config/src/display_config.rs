//! Output configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// How results are presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of movies shown by the top-movies views (1-100)
    pub top_n: usize,

    /// Width of separator rules (10-200)
    pub separator_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            separator_width: 60,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::in_range(self.top_n, 1, 100, "display.top_n"),
            Validator::in_range(self.separator_width, 10, 200, "display.separator_width"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_top_n() {
        let mut config = DisplayConfig::default();
        config.top_n = 0;
        assert!(config.validate().is_err());

        config.top_n = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_separator_width() {
        let mut config = DisplayConfig::default();
        config.separator_width = 5;
        let errors = config.validate().unwrap_err();
        assert_eq!(errors[0].field, "display.separator_width");
    }
}
