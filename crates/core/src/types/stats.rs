//! Catalog statistics

use crate::types::MovieRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count and mean rating for one genre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenreStats {
    pub count: usize,
    /// Mean rating rounded to two decimals
    pub avg_rating: f64,
}

impl GenreStats {
    pub fn new(count: usize, avg_rating: f64) -> Self {
        Self { count, avg_rating }
    }
}

/// Catalog-wide statistics
///
/// Only produced for a non-empty catalog, so every extremum is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_movies: usize,
    /// Mean rating rounded to two decimals
    pub average_rating: f64,
    pub highest_rated: MovieRecord,
    pub lowest_rated: MovieRecord,
    pub oldest_movie: MovieRecord,
    pub newest_movie: MovieRecord,
    /// Keyed by genre as stored, in ascending order
    pub genre_statistics: BTreeMap<String, GenreStats>,
}
