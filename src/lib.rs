//! vidcat - In-memory video catalog
//!
//! Keeps a catalog of videos and named playlists of video titles, with
//! multi-criteria search, summary statistics, bulk loading from a
//! line-record text file, and static HTML pages for playlists.
//!
//! # Ownership
//!
//! The [`Catalog`] owns every entry and playlist. Lookups and listings hand
//! back independent copies, so callers can never change stored state
//! through a returned value. `Catalog` does no internal locking; hosts that
//! share one across tasks wrap it in a single `Mutex`.
//!
//! # Modules
//!
//! - `domain`: Data structures (Genre, Entry, Collection)
//! - `library`: The catalog, search queries, and statistics
//! - `adapters`: Bulk loader and page generator
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Load a data file and show statistics
//! vidcat --data videos.txt stats
//!
//! # Short comedies
//! vidcat --data videos.txt search --max-duration 10 --genre comedy
//!
//! # Build a playlist page
//! vidcat --data videos.txt page -p "Road Trip" -t Cats -t Dogs
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use adapters::{LoadError, LoadReport, PageError, PageOptions};
pub use domain::{Collection, Entry, Genre, ValidationError};
pub use library::{Catalog, CatalogStats, GenreCount, SearchQuery};
