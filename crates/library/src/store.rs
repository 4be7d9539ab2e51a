// FILE: crates/library/src/store.rs

use crate::catalog::Catalog;
use crate::seed::{write_seed, CATALOG_HEADERS};
use log::{error, info, warn};
use marquee_core::{AppError, MovieRecord, RecoveryAction, Result, Validator};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Loads the movie catalog from its backing file
pub struct CatalogStore {
    path: PathBuf,
    bootstrap_if_missing: bool,
}

/// One catalog row before numeric coercion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMovieRow {
    title: String,
    genre: String,
    rating: String,
    year: String,
    director: String,
}

impl RawMovieRow {
    fn into_movie(self, line: u64) -> Result<MovieRecord> {
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::invalid_field(line, "Rating", self.rating.as_str(), e))?;
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|e| AppError::invalid_field(line, "Year", self.year.as_str(), e))?;

        Ok(MovieRecord {
            title: self.title,
            genre: self.genre,
            rating,
            year,
            director: self.director,
        })
    }
}

impl CatalogStore {
    /// Creates a store for the given catalog file
    ///
    /// A missing file is replaced by the sample catalog unless
    /// [`with_bootstrap`](Self::with_bootstrap) disables it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bootstrap_if_missing: true,
        }
    }

    pub fn with_bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap_if_missing = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the sample catalog to the backing file
    pub fn bootstrap_seed(&self) -> Result<()> {
        match write_seed(&self.path) {
            Ok(()) => {
                info!("Sample catalog written to {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                error!(
                    "Failed to write sample catalog to {}: {}",
                    self.path.display(),
                    e
                );
                Err(AppError::BootstrapFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Loads every record from the backing file
    ///
    /// A missing file triggers one bootstrap and one retry. Any row whose
    /// rating or year cannot be coerced fails the whole load.
    pub fn load(&self) -> Result<Catalog> {
        match self.read_catalog() {
            Err(e)
                if self.bootstrap_if_missing
                    && e.recovery_action() == RecoveryAction::BootstrapSeed =>
            {
                warn!(
                    "Catalog file {} not found, creating sample catalog",
                    self.path.display()
                );
                self.bootstrap_seed()?;
                self.read_catalog()
            }
            result => result,
        }
    }

    fn read_catalog(&self) -> Result<Catalog> {
        let file = File::open(&self.path).map_err(|e| self.io_error("read", e))?;
        let movies = read_movies(file, &self.path)?;

        for movie in &movies {
            if let Err(problems) = movie.validate() {
                warn!("Suspicious record '{}': {}", movie.title, problems.join("; "));
            }
        }

        info!("Loaded {} movies from {}", movies.len(), self.path.display());
        Ok(Catalog::from_movies(movies))
    }

    fn io_error(&self, operation: &str, err: io::Error) -> AppError {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::FileNotFound {
                path: self.path.clone(),
            },
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied {
                operation: operation.to_string(),
                path: self.path.clone(),
            },
            _ => AppError::IoError {
                message: format!("Failed to {} {}", operation, self.path.display()),
                source: err,
            },
        }
    }
}

/// Parses catalog rows from any reader, in file order
///
/// `path` is only used for error reporting.
pub fn read_movies<R: Read>(reader: R, path: &Path) -> Result<Vec<MovieRecord>> {
    // Rows longer than the header are accepted; the extra cells are ignored
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::csv(path, "Failed to read header row", e))?
        .clone();

    for field in CATALOG_HEADERS {
        if !headers.iter().any(|h| h == field) {
            return Err(AppError::MissingField {
                field: field.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut movies = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| AppError::csv(path, "Failed to read catalog row", e))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: RawMovieRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AppError::csv(path, format!("Malformed row on line {}", line), e))?;
        movies.push(row.into_movie(line)?);
    }

    Ok(movies)
}
