//! Bootstrap seed catalog
//!
//! Written when the catalog file does not exist yet. Ratings and years are
//! stored as text, exactly as they appear in the file.

use marquee_core::{AppError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Header row of the catalog file, in column order
pub const CATALOG_HEADERS: [&str; 5] = ["Title", "Genre", "Rating", "Year", "Director"];

/// Sample catalog rows: title, genre, rating, year, director
pub const SEED_MOVIES: [[&str; 5]; 25] = [
    ["The Shawshank Redemption", "Drama", "9.3", "1994", "Frank Darabont"],
    ["The Godfather", "Crime", "9.2", "1972", "Francis Ford Coppola"],
    ["The Dark Knight", "Action", "9.0", "2008", "Christopher Nolan"],
    ["Pulp Fiction", "Crime", "8.9", "1994", "Quentin Tarantino"],
    ["Forrest Gump", "Drama", "8.8", "1994", "Robert Zemeckis"],
    ["Inception", "Sci-Fi", "8.8", "2010", "Christopher Nolan"],
    ["The Matrix", "Sci-Fi", "8.7", "1999", "Wachowski Brothers"],
    ["Goodfellas", "Crime", "8.7", "1990", "Martin Scorsese"],
    ["The Silence of the Lambs", "Thriller", "8.6", "1991", "Jonathan Demme"],
    ["Saving Private Ryan", "War", "8.6", "1998", "Steven Spielberg"],
    ["Spirited Away", "Animation", "8.6", "2001", "Hayao Miyazaki"],
    ["The Green Mile", "Drama", "8.6", "1999", "Frank Darabont"],
    ["Interstellar", "Sci-Fi", "8.6", "2014", "Christopher Nolan"],
    ["Parasite", "Thriller", "8.5", "2019", "Bong Joon-ho"],
    ["The Lion King", "Animation", "8.5", "1994", "Roger Allers"],
    ["Back to the Future", "Sci-Fi", "8.5", "1985", "Robert Zemeckis"],
    ["The Prestige", "Mystery", "8.5", "2006", "Christopher Nolan"],
    ["Whiplash", "Drama", "8.5", "2014", "Damien Chazelle"],
    ["The Usual Suspects", "Crime", "8.5", "1995", "Bryan Singer"],
    ["Toy Story", "Animation", "8.3", "1995", "John Lasseter"],
    ["Joker", "Crime", "8.4", "2019", "Todd Phillips"],
    ["Avengers: Endgame", "Action", "8.4", "2019", "Russo Brothers"],
    ["Spider-Man: Into the Spider-Verse", "Animation", "8.4", "2018", "Peter Ramsey"],
    ["The Departed", "Crime", "8.5", "2006", "Martin Scorsese"],
    ["Gladiator", "Action", "8.5", "2000", "Ridley Scott"],
];

/// Writes the seed catalog to `path` atomically
///
/// The rows go to a temporary file in the target directory which is then
/// renamed over `path`, so a partially written catalog is never observed.
pub fn write_seed(path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)?;
    let mut temp_file = NamedTempFile::new_in(dir)?;

    {
        let mut writer = csv::Writer::from_writer(temp_file.as_file_mut());
        writer
            .write_record(CATALOG_HEADERS)
            .map_err(|e| AppError::csv(path, "Failed to write header row", e))?;
        for row in &SEED_MOVIES {
            writer
                .write_record(row)
                .map_err(|e| AppError::csv(path, "Failed to write seed row", e))?;
        }
        writer.flush()?;
    }

    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| AppError::from(e.error))?;

    Ok(())
}
