//! Domain types for Marquee
//!
//! This module contains all domain models organized by responsibility:
//! - `movie`: The movie record loaded from the catalog file
//! - `preferences`: Optional criteria used for recommendations
//! - `stats`: Catalog-wide aggregate statistics
//! - `common`: Shared traits and numeric helpers

mod common;
mod movie;
mod preferences;
mod stats;

// Re-export all public types
pub use common::{round_to_hundredths, Validator};
pub use movie::MovieRecord;
pub use preferences::Preferences;
pub use stats::{CatalogStats, GenreStats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let movie = MovieRecord::new("Heat", "Crime", 8.3, 1995, "Michael Mann");
        let _prefs: Preferences = Preferences::default();
        let _genre = GenreStats::new(1, movie.rating);
        assert!(movie.is_valid());
    }

    #[test]
    fn test_rounding_is_shared() {
        assert_eq!(round_to_hundredths(9.166_666), 9.17);
    }
}
