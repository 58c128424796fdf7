//! In-memory video library.
//!
//! The catalog owns every entry and playlist. Callers only ever receive
//! copies; the one exception is comment appends, which mutate the stored
//! entry in place.

pub mod catalog;
pub mod search;
pub mod stats;

pub use catalog::Catalog;
pub use search::SearchQuery;
pub use stats::{CatalogStats, GenreCount};
