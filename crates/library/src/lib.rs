//! Marquee movie library
//!
//! The catalog store loads movie records from a comma-separated file (writing
//! a sample catalog when none exists) and the query layer answers filter,
//! ranking, recommendation and statistics requests over the loaded records.

pub mod catalog;
pub mod query;
pub mod seed;
pub mod stats;
pub mod store;

pub use catalog::Catalog;
pub use query::RECOMMENDATION_LIMIT;
pub use seed::{write_seed, CATALOG_HEADERS, SEED_MOVIES};
pub use store::CatalogStore;
