// FILE: crates/library/src/catalog.rs

use marquee_core::MovieRecord;

/// The in-memory movie catalog
///
/// Records keep file order and are never mutated after load. Reloading means
/// building a new `Catalog` and replacing the old one as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Creates a catalog from records in file order
    pub fn from_movies(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.movies().is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::from_movies(vec![
            MovieRecord::new("B", "Drama", 7.0, 2001, "X"),
            MovieRecord::new("A", "Drama", 8.0, 2000, "Y"),
        ]);

        let titles: Vec<&str> = catalog.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!((&catalog).into_iter().count(), 2);
    }
}
