//! Aggregate statistics over the catalog

use crate::catalog::Catalog;
use log::debug;
use marquee_core::{
    round_to_hundredths, AppError, CatalogStats, GenreStats, MovieRecord, Result,
};
use std::collections::BTreeMap;

fn mean<'a>(movies: impl IntoIterator<Item = &'a MovieRecord>) -> Option<f64> {
    let (sum, count) = movies
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), m| (sum + m.rating, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

impl Catalog {
    /// Computes catalog-wide and per-genre statistics
    ///
    /// Averages are rounded with [`round_to_hundredths`]. Extremes resolve
    /// ties to the first record in catalog order. An empty catalog has no
    /// defined average and yields [`AppError::EmptyCatalog`].
    pub fn statistics(&self) -> Result<CatalogStats> {
        let movies = self.movies();
        let first = movies.first().ok_or(AppError::EmptyCatalog)?;
        let average = mean(movies).ok_or(AppError::EmptyCatalog)?;

        let mut highest = first;
        let mut lowest = first;
        let mut oldest = first;
        let mut newest = first;
        for movie in &movies[1..] {
            if movie.rating > highest.rating {
                highest = movie;
            }
            if movie.rating < lowest.rating {
                lowest = movie;
            }
            if movie.year < oldest.year {
                oldest = movie;
            }
            if movie.year > newest.year {
                newest = movie;
            }
        }

        let mut genre_statistics = BTreeMap::new();
        for genre in self.unique_genres() {
            let matching = self.filter_by_genre(&genre);
            if let Some(avg) = mean(matching.iter().copied()) {
                genre_statistics.insert(
                    genre,
                    GenreStats::new(matching.len(), round_to_hundredths(avg)),
                );
            }
        }

        debug!(
            "Computed statistics for {} movies across {} genres",
            movies.len(),
            genre_statistics.len()
        );

        Ok(CatalogStats {
            total_movies: movies.len(),
            average_rating: round_to_hundredths(average),
            highest_rated: highest.clone(),
            lowest_rated: lowest.clone(),
            oldest_movie: oldest.clone(),
            newest_movie: newest.clone(),
            genre_statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(mean(std::iter::empty()), None);
    }

    #[test]
    fn test_mean() {
        let movies = [
            MovieRecord::new("A", "Drama", 8.0, 2000, "X"),
            MovieRecord::new("B", "Drama", 9.0, 2001, "Y"),
        ];
        assert_eq!(mean(&movies), Some(8.5));
    }

    #[test]
    fn test_single_movie_is_every_extreme() -> Result<()> {
        let heat = MovieRecord::new("Heat", "Crime", 8.3, 1995, "Michael Mann");
        let catalog = Catalog::from_movies(vec![heat]);
        let stats = catalog.statistics()?;

        assert_eq!(stats.total_movies, 1);
        assert_eq!(stats.average_rating, 8.3);
        assert_eq!(stats.highest_rated, stats.lowest_rated);
        assert_eq!(stats.oldest_movie, stats.newest_movie);
        Ok(())
    }
}
