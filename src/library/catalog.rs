//! Catalog of videos and playlists.
//!
//! Entries and playlists are kept in insertion order. Lookups are linear
//! scans and return the first match.

use tracing::{debug, warn};

use crate::domain::{require_text, Collection, Entry, Genre, ValidationError};

use super::search::SearchQuery;
use super::stats::{CatalogStats, GenreCount};

/// Owner of all entries and playlists
///
/// Titles are not required to be unique; playlist names are.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    collections: Vec<Collection>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new entry
    ///
    /// Returns `false` if the entry is rejected; the reason is logged, the
    /// catalog is left untouched. Duplicate titles are accepted.
    pub fn add_entry(
        &mut self,
        title: &str,
        url: &str,
        duration_minutes: i64,
        genre: Genre,
    ) -> bool {
        match Entry::new(title, url, duration_minutes, genre) {
            Ok(entry) => {
                debug!(title, "Added entry");
                self.entries.push(entry);
                true
            }
            Err(e) => {
                warn!(title, "Rejected entry: {}", e);
                false
            }
        }
    }

    /// Copies of every entry, in storage order
    pub fn all_entries(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// Copy of the first entry with exactly this title
    pub fn find_entry(&self, title: &str) -> Result<Option<Entry>, ValidationError> {
        require_text("title", title)?;
        Ok(self.entry(title).cloned())
    }

    /// Append a comment to the stored entry with this title
    ///
    /// Returns `false` on blank input or when no entry has the title.
    pub fn add_comment(&mut self, title: &str, text: &str) -> bool {
        if title.trim().is_empty() || text.trim().is_empty() {
            return false;
        }

        match self.entries.iter_mut().find(|e| e.title() == title) {
            Some(entry) => entry.add_comment(text).is_ok(),
            None => false,
        }
    }

    /// Create an empty playlist
    ///
    /// Returns `Ok(false)` if a playlist with this name already exists.
    pub fn add_collection(&mut self, name: &str) -> Result<bool, ValidationError> {
        let collection = Collection::new(name)?;

        if self.collection(name).is_some() {
            return Ok(false);
        }

        debug!(name, "Created playlist");
        self.collections.push(collection);
        Ok(true)
    }

    /// Playlist names in creation order
    pub fn collection_names(&self) -> Vec<String> {
        self.collections
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    /// Append a title to a playlist
    ///
    /// Only succeeds when both the entry and the playlist exist. Adding the
    /// same title twice lists it twice.
    pub fn add_entry_to_collection(&mut self, title: &str, collection_name: &str) -> bool {
        if title.trim().is_empty() || collection_name.trim().is_empty() {
            return false;
        }
        if self.entry(title).is_none() {
            return false;
        }

        match self
            .collections
            .iter_mut()
            .find(|c| c.name() == collection_name)
        {
            Some(collection) => {
                collection.add_member(title);
                debug!(title, playlist = collection_name, "Added to playlist");
                true
            }
            None => false,
        }
    }

    /// Copy of the named playlist
    pub fn get_collection(&self, name: &str) -> Result<Option<Collection>, ValidationError> {
        require_text("playlist name", name)?;
        Ok(self.collection(name).cloned())
    }

    /// Remove every entry and playlist
    pub fn clear(&mut self) {
        self.entries.clear();
        self.collections.clear();
    }

    /// Build an unregistered playlist of the titles matching `query`
    ///
    /// Matches appear in storage order, without deduplication. The result is
    /// never added to the catalog's playlists.
    pub fn search(
        &self,
        collection_name: &str,
        query: &SearchQuery,
    ) -> Result<Collection, ValidationError> {
        let mut results = Collection::new(collection_name)?;

        for entry in self.entries.iter().filter(|e| query.matches(e)) {
            results.add_member(entry.title());
        }

        Ok(results)
    }

    /// Totals and per-genre counts
    pub fn stats(&self) -> CatalogStats {
        let genres = Genre::ALL
            .into_iter()
            .map(|genre| GenreCount {
                genre,
                count: self.entries.iter().filter(|e| e.genre() == genre).count(),
            })
            .collect();

        CatalogStats {
            entries: self.entries.len(),
            collections: self.collections.len(),
            genres,
        }
    }

    /// Formatted statistics report
    pub fn statistics(&self) -> String {
        self.stats().to_string()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, title: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.title() == title)
    }

    fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name() == name)
    }
}
