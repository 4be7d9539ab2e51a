//! Marquee core domain
//!
//! Shared types and the error taxonomy used by the catalog, the query layer
//! and the command line front end.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, ErrorSeverity, RecoveryAction, Result};
pub use types::{
    round_to_hundredths, CatalogStats, GenreStats, MovieRecord, Preferences, Validator,
};
