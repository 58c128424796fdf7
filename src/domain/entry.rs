//! A single cataloged video.
//!
//! Entries are identified by title alone: equality, ordering, and hashing
//! all look only at the title.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::error::ValidationError;
use super::genre::Genre;
use super::require_text;

/// A video record
///
/// `Clone` produces a fully independent copy, comments included.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    title: String,
    url: String,
    duration_minutes: u32,
    genre: Genre,
    comments: Vec<String>,
}

impl Entry {
    /// Create a validated entry with no comments
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        duration_minutes: i64,
        genre: Genre,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let url = url.into();

        require_text("title", &title)?;
        require_text("url", &url)?;
        if duration_minutes <= 0 {
            return Err(ValidationError::NonPositiveDuration {
                actual: duration_minutes,
            });
        }
        let duration_minutes = u32::try_from(duration_minutes).map_err(|_| {
            ValidationError::DurationOutOfRange {
                actual: duration_minutes,
            }
        })?;

        Ok(Self {
            title,
            url,
            duration_minutes,
            genre,
            comments: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Comments in the order they were added
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Append a comment
    pub fn add_comment(&mut self, text: impl Into<String>) -> Result<(), ValidationError> {
        let text = text.into();
        require_text("comment", &text)?;
        self.comments.push(text);
        Ok(())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title.cmp(&other.title)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Title: \"{}\"", self.title)?;
        writeln!(f, "Url: {}", self.url)?;
        writeln!(f, "Duration (minutes): {}", self.duration_minutes)?;
        writeln!(f, "Genre: {}", self.genre)
    }
}
