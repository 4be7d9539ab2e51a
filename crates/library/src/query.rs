//! Query layer over the loaded catalog
//!
//! Every query borrows the catalog and returns a freshly allocated list of
//! borrowed records; nothing here mutates the catalog.

use crate::catalog::Catalog;
use log::debug;
use marquee_core::{MovieRecord, Preferences};
use std::collections::BTreeSet;

/// Maximum number of movies returned by [`Catalog::recommend`]
pub const RECOMMENDATION_LIMIT: usize = 5;

/// Sorts by descending rating, keeping catalog order among equal ratings
fn sort_by_rating_desc(movies: &mut [&MovieRecord]) {
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}

impl Catalog {
    /// Returns each distinct genre once, as stored, in ascending order
    pub fn unique_genres(&self) -> Vec<String> {
        self.iter()
            .map(|m| m.genre.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Returns each distinct genre with the number of movies matching it
    pub fn genre_counts(&self) -> Vec<(String, usize)> {
        self.unique_genres()
            .into_iter()
            .map(|genre| {
                let count = self.filter_by_genre(&genre).len();
                (genre, count)
            })
            .collect()
    }

    /// Movies whose genre matches case-insensitively
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        self.iter().filter(|m| m.matches_genre(genre)).collect()
    }

    /// Movies released in `start..=end`; empty when `start > end`
    pub fn filter_by_year_range(&self, start: i32, end: i32) -> Vec<&MovieRecord> {
        self.iter().filter(|m| m.released_between(start, end)).collect()
    }

    /// Movies rated at least `min_rating`
    pub fn filter_by_min_rating(&self, min_rating: f64) -> Vec<&MovieRecord> {
        self.iter().filter(|m| m.rating >= min_rating).collect()
    }

    /// The `n` best-rated movies, optionally within one genre
    pub fn top_movies(&self, n: usize, genre: Option<&str>) -> Vec<&MovieRecord> {
        let mut movies = match genre {
            Some(genre) => self.filter_by_genre(genre),
            None => self.iter().collect(),
        };
        sort_by_rating_desc(&mut movies);
        movies.truncate(n);
        movies
    }

    /// Recommends up to [`RECOMMENDATION_LIMIT`] movies matching every set preference
    pub fn recommend(&self, preferences: &Preferences) -> Vec<&MovieRecord> {
        let mut movies: Vec<&MovieRecord> = self.iter().collect();

        if let Some(genre) = &preferences.genre {
            movies.retain(|m| m.matches_genre(genre));
        }
        if let Some(min_rating) = preferences.min_rating {
            movies.retain(|m| m.rating >= min_rating);
        }
        if let Some(year_from) = preferences.year_from {
            movies.retain(|m| m.year >= year_from);
        }
        if let Some(year_to) = preferences.year_to {
            movies.retain(|m| m.year <= year_to);
        }

        debug!(
            "{} of {} movies match preferences {:?}",
            movies.len(),
            self.len(),
            preferences
        );

        sort_by_rating_desc(&mut movies);
        movies.truncate(RECOMMENDATION_LIMIT);
        movies
    }
}
