//! Named playlists of video titles.

use serde::Serialize;

use super::error::ValidationError;
use super::require_text;

/// A named, ordered list of titles
///
/// Membership is append-only and keeps duplicates. Titles are not checked
/// against any catalog here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    name: String,
    titles: Vec<String>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text("playlist name", &name)?;
        Ok(Self {
            name,
            titles: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member titles in insertion order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Append a title
    ///
    /// Always succeeds, so there is no success flag; the catalog-level
    /// `add_entry_to_collection` reports the outcome as a `bool`.
    pub fn add_member(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
