//! Range and presence checks for config values
//!
//! Checks are collected rather than stopping at the first failure, so a
//! hand-edited `marquee.toml` reports every bad setting in one pass.

pub use crate::error::ValidationError;

/// A table of the config file that can check its own values
pub trait ConfigSection: Default {
    /// Returns every problem found in this table
    fn validate(&self) -> Result<(), Vec<ValidationError>>;
}

/// Building blocks for `ConfigSection::validate`
pub struct Validator;

impl Validator {
    /// Checks `min <= value <= max`
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        }
    }

    /// Checks that a name or path has at least one visible character
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Gathers the failed checks of one section
    pub fn collect_errors<I>(results: I) -> Result<(), Vec<ValidationError>>
    where
        I: IntoIterator<Item = Result<(), ValidationError>>,
    {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
