//! Movie record domain model

use crate::types::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One movie from the catalog file
///
/// Field names serialize to the catalog headers
/// (`Title`, `Genre`, `Rating`, `Year`, `Director`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    pub rating: f64,
    pub year: i32,
    pub director: String,
}

impl MovieRecord {
    /// Creates a new movie record
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        year: i32,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            rating,
            year,
            director: director.into(),
        }
    }

    /// Returns true if this movie belongs to `genre`, ignoring case
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }

    /// Returns true if the release year lies in `start..=end`
    pub fn released_between(&self, start: i32, end: i32) -> bool {
        (start..=end).contains(&self.year)
    }
}

impl Validator for MovieRecord {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if !self.rating.is_finite() {
            errors.push("Rating must be a finite number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn godfather() -> MovieRecord {
        MovieRecord::new("The Godfather", "Crime", 9.2, 1972, "Francis Ford Coppola")
    }

    #[test]
    fn test_movie_creation() {
        let movie = godfather();
        assert_eq!(movie.title, "The Godfather");
        assert_eq!(movie.genre, "Crime");
        assert_eq!(movie.rating, 9.2);
        assert_eq!(movie.year, 1972);
        assert_eq!(movie.director, "Francis Ford Coppola");
    }

    #[test]
    fn test_matches_genre_ignores_case() {
        let movie = godfather();
        assert!(movie.matches_genre("crime"));
        assert!(movie.matches_genre("CRIME"));
        assert!(!movie.matches_genre("Drama"));
        // Stored value is untouched
        assert_eq!(movie.genre, "Crime");
    }

    #[test]
    fn test_released_between_is_inclusive() {
        let movie = godfather();
        assert!(movie.released_between(1972, 1972));
        assert!(movie.released_between(1970, 1980));
        assert!(!movie.released_between(1973, 1980));
        assert!(!movie.released_between(1980, 1970));
    }

    #[test]
    fn test_movie_validation() {
        assert!(godfather().is_valid());

        let mut movie = godfather();
        movie.title = "   ".to_string();
        assert!(!movie.is_valid());

        let mut movie = godfather();
        movie.rating = f64::NAN;
        let errors = movie.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Rating"));
    }

    #[test]
    fn test_rating_range_is_not_enforced() {
        let mut movie = godfather();
        movie.rating = 11.5;
        assert!(movie.is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(godfather().to_string(), "The Godfather (1972)");
    }

    #[test]
    fn test_serialized_field_names_match_headers() {
        let json = serde_json::to_value(godfather()).unwrap();
        assert_eq!(json["Title"], "The Godfather");
        assert_eq!(json["Year"], 1972);
        assert!(json.get("title").is_none());
    }
}
