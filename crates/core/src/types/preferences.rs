//! Recommendation preferences

use serde::{Deserialize, Serialize};

/// Independently optional recommendation criteria
///
/// An absent field imposes no constraint. A present value always applies,
/// including zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Exact genre, compared case-insensitively
    pub genre: Option<String>,
    /// Inclusive lower bound on rating
    pub min_rating: Option<f64>,
    /// Inclusive lower bound on release year
    pub year_from: Option<i32>,
    /// Inclusive upper bound on release year
    pub year_to: Option<i32>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn with_year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.min_rating.is_none()
            && self.year_from.is_none()
            && self.year_to.is_none()
    }
}
