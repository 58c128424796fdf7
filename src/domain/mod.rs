//! Domain types for the video catalog.
//!
//! This module contains the leaf data structures:
//! - Genre: Closed set of video categories
//! - Entry: A single cataloged video
//! - Collection: A named, ordered list of video titles (playlist)

pub mod collection;
pub mod entry;
pub mod error;
pub mod genre;

// Re-export commonly used types
pub use collection::Collection;
pub use entry::Entry;
pub use error::ValidationError;
pub use genre::Genre;

/// Reject empty or whitespace-only text
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(())
}
