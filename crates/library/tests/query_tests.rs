//! Integration tests for the query layer over the seed catalog

use marquee_core::{AppError, MovieRecord, Preferences};
use marquee_library::{Catalog, CatalogStore, RECOMMENDATION_LIMIT};
use tempfile::TempDir;

fn seed_catalog() -> Result<(TempDir, Catalog), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let catalog = CatalogStore::new(temp_dir.path().join("movies.csv")).load()?;
    Ok((temp_dir, catalog))
}

fn titles<'a>(movies: &[&'a MovieRecord]) -> Vec<&'a str> {
    movies.iter().map(|&m| m.title.as_str()).collect()
}

fn is_sorted_desc(movies: &[&MovieRecord]) -> bool {
    movies.windows(2).all(|w| w[0].rating >= w[1].rating)
}

#[test]
fn test_unique_genres() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let genres = catalog.unique_genres();

    assert_eq!(
        genres,
        vec!["Action", "Animation", "Crime", "Drama", "Mystery", "Sci-Fi", "Thriller", "War"]
    );
    Ok(())
}

#[test]
fn test_unique_genres_ignores_input_order() {
    let catalog = Catalog::from_movies(vec![
        MovieRecord::new("C", "War", 7.0, 2000, "X"),
        MovieRecord::new("A", "Drama", 7.0, 2000, "X"),
        MovieRecord::new("B", "War", 7.0, 2000, "X"),
        MovieRecord::new("D", "Drama", 7.0, 2000, "X"),
    ]);
    assert_eq!(catalog.unique_genres(), vec!["Drama", "War"]);
}

#[test]
fn test_filter_by_genre_is_complete_and_ordered() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let crime = catalog.filter_by_genre("cRiMe");

    assert!(crime.iter().all(|m| m.genre.to_lowercase() == "crime"));
    let expected: Vec<&MovieRecord> = catalog.iter().filter(|m| m.genre == "Crime").collect();
    assert_eq!(crime, expected);
    assert_eq!(
        titles(&crime),
        vec![
            "The Godfather",
            "Pulp Fiction",
            "Goodfellas",
            "The Usual Suspects",
            "Joker",
            "The Departed"
        ]
    );
    Ok(())
}

#[test]
fn test_filter_by_unknown_genre_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    assert!(catalog.filter_by_genre("Western").is_empty());
    Ok(())
}

#[test]
fn test_filter_by_year_range_inclusive() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let nineties = catalog.filter_by_year_range(1994, 1995);

    assert_eq!(
        titles(&nineties),
        vec![
            "The Shawshank Redemption",
            "Pulp Fiction",
            "Forrest Gump",
            "The Lion King",
            "The Usual Suspects",
            "Toy Story"
        ]
    );
    Ok(())
}

#[test]
fn test_filter_by_reversed_year_range_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    assert!(catalog.filter_by_year_range(2000, 1990).is_empty());
    Ok(())
}

#[test]
fn test_filter_by_min_rating() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let top = catalog.filter_by_min_rating(9.0);

    assert_eq!(
        titles(&top),
        vec!["The Shawshank Redemption", "The Godfather", "The Dark Knight"]
    );
    assert_eq!(catalog.filter_by_min_rating(0.0).len(), catalog.len());
    assert!(catalog.filter_by_min_rating(9.5).is_empty());
    Ok(())
}

#[test]
fn test_top_movies_overall() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let top = catalog.top_movies(5, None);

    assert_eq!(top.len(), 5);
    assert!(is_sorted_desc(&top));
    // Forrest Gump and Inception share 8.8; catalog order decides
    assert_eq!(
        titles(&top),
        vec![
            "The Shawshank Redemption",
            "The Godfather",
            "The Dark Knight",
            "Pulp Fiction",
            "Forrest Gump"
        ]
    );
    Ok(())
}

#[test]
fn test_top_movies_by_genre() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let top = catalog.top_movies(5, Some("animation"));

    assert_eq!(
        titles(&top),
        vec![
            "Spirited Away",
            "The Lion King",
            "Spider-Man: Into the Spider-Verse",
            "Toy Story"
        ]
    );
    Ok(())
}

#[test]
fn test_top_movies_larger_than_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    assert_eq!(catalog.top_movies(100, None).len(), catalog.len());
    Ok(())
}

#[test]
fn test_recommend_drama() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    let prefs = Preferences::new().with_genre("Drama").with_min_rating(8.5);

    let picks = catalog.recommend(&prefs);

    assert!(picks.len() <= RECOMMENDATION_LIMIT);
    assert!(picks.iter().all(|m| m.genre == "Drama" && m.rating >= 8.5));
    assert!(is_sorted_desc(&picks));
    assert_eq!(
        titles(&picks),
        vec![
            "The Shawshank Redemption",
            "Forrest Gump",
            "The Green Mile",
            "Whiplash"
        ]
    );
    Ok(())
}

#[test]
fn test_recommend_without_preferences_is_top_five() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let picks = catalog.recommend(&Preferences::default());

    assert_eq!(picks, catalog.top_movies(5, None));
    Ok(())
}

#[test]
fn test_recommend_year_window() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    let prefs = Preferences::new().with_year_from(2010).with_year_to(2014);

    let picks = catalog.recommend(&prefs);

    assert_eq!(titles(&picks), vec!["Inception", "Interstellar", "Whiplash"]);
    Ok(())
}

#[test]
fn test_recommend_caps_results() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    let prefs = Preferences::new().with_min_rating(8.0);

    assert_eq!(catalog.recommend(&prefs).len(), RECOMMENDATION_LIMIT);
    Ok(())
}

#[test]
fn test_recommend_impossible_window() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;
    let prefs = Preferences::new().with_year_from(2020).with_year_to(1990);

    assert!(catalog.recommend(&prefs).is_empty());
    Ok(())
}

#[test]
fn test_statistics_three_movies() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_movies(vec![
        MovieRecord::new("The Shawshank Redemption", "Drama", 9.3, 1994, "Frank Darabont"),
        MovieRecord::new("The Godfather", "Crime", 9.2, 1972, "Francis Ford Coppola"),
        MovieRecord::new("The Dark Knight", "Action", 9.0, 2008, "Christopher Nolan"),
    ]);

    let stats = catalog.statistics()?;

    assert_eq!(stats.total_movies, 3);
    assert_eq!(stats.average_rating, 9.17);
    assert_eq!(stats.highest_rated.title, "The Shawshank Redemption");
    assert_eq!(stats.lowest_rated.title, "The Dark Knight");
    assert_eq!(stats.oldest_movie.title, "The Godfather");
    assert_eq!(stats.newest_movie.title, "The Dark Knight");
    Ok(())
}

#[test]
fn test_statistics_ties_keep_first() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::from_movies(vec![
        MovieRecord::new("First", "Drama", 8.0, 2000, "X"),
        MovieRecord::new("Second", "Drama", 8.0, 2000, "Y"),
    ]);

    let stats = catalog.statistics()?;

    assert_eq!(stats.highest_rated.title, "First");
    assert_eq!(stats.lowest_rated.title, "First");
    assert_eq!(stats.oldest_movie.title, "First");
    assert_eq!(stats.newest_movie.title, "First");
    Ok(())
}

#[test]
fn test_statistics_over_seed() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let stats = catalog.statistics()?;

    assert_eq!(stats.total_movies, 25);
    assert_eq!(stats.average_rating, 8.64);
    assert_eq!(stats.highest_rated.title, "The Shawshank Redemption");
    assert_eq!(stats.lowest_rated.title, "Toy Story");
    assert_eq!(stats.oldest_movie.title, "The Godfather");
    assert_eq!(stats.newest_movie.title, "Parasite");

    let genres: Vec<&str> = stats.genre_statistics.keys().map(String::as_str).collect();
    assert_eq!(genres, catalog.unique_genres());

    let crime = &stats.genre_statistics["Crime"];
    assert_eq!(crime.count, 6);
    assert_eq!(crime.avg_rating, 8.7);

    let drama = &stats.genre_statistics["Drama"];
    assert_eq!(drama.count, 4);
    assert_eq!(drama.avg_rating, 8.8);
    Ok(())
}

#[test]
fn test_statistics_empty_catalog() {
    let catalog = Catalog::default();

    let result = catalog.statistics();

    assert!(matches!(result, Err(AppError::EmptyCatalog)));
}

#[test]
fn test_genre_counts_over_seed() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, catalog) = seed_catalog()?;

    let counts = catalog.genre_counts();

    assert_eq!(counts.len(), 8);
    assert_eq!(counts[0], ("Action".to_string(), 3));
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), catalog.len());
    Ok(())
}
