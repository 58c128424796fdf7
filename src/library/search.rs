//! Multi-criteria search over catalog entries.

use crate::domain::{Entry, Genre};

/// Filter criteria for [`Catalog::search`](super::Catalog::search)
///
/// Every criterion is optional; an unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Exact, case-sensitive title
    pub title: Option<String>,

    /// Inclusive upper bound on duration in minutes
    pub max_duration_minutes: Option<u32>,

    /// Exact genre
    pub genre: Option<Genre>,
}

impl SearchQuery {
    /// A query that matches every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact title; blank text leaves the criterion unset
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            None
        } else {
            Some(title)
        };
        self
    }

    /// Bound the duration; negative values leave the criterion unset
    pub fn with_max_duration(mut self, minutes: i64) -> Self {
        self.max_duration_minutes = u32::try_from(minutes).ok();
        self
    }

    /// Require a genre
    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    /// Check an entry against all set criteria
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(title) = &self.title {
            if entry.title() != title {
                return false;
            }
        }

        if let Some(max) = self.max_duration_minutes {
            if entry.duration_minutes() > max {
                return false;
            }
        }

        if let Some(genre) = self.genre {
            if entry.genre() != genre {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, minutes: i64, genre: Genre) -> Entry {
        Entry::new(title, "https://example.com", minutes, genre).unwrap()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SearchQuery::new();
        assert!(query.matches(&entry("A", 1, Genre::Music)));
        assert!(query.matches(&entry("B", 500, Genre::Documentary)));
    }

    #[test]
    fn test_negative_duration_is_ignored() {
        let query = SearchQuery::new().with_max_duration(-1);
        assert_eq!(query.max_duration_minutes, None);
        assert!(query.matches(&entry("Long", 1000, Genre::Music)));
    }

    #[test]
    fn test_duration_bound_is_inclusive() {
        let query = SearchQuery::new().with_max_duration(10);
        assert!(query.matches(&entry("Exact", 10, Genre::Music)));
        assert!(query.matches(&entry("Short", 9, Genre::Music)));
        assert!(!query.matches(&entry("Long", 11, Genre::Music)));
    }

    #[test]
    fn test_zero_duration_bound_excludes_everything() {
        let query = SearchQuery::new().with_max_duration(0);
        assert!(!query.matches(&entry("Shortest", 1, Genre::Music)));
    }

    #[test]
    fn test_blank_title_is_ignored() {
        let query = SearchQuery::new().with_title("  ");
        assert_eq!(query.title, None);
    }

    #[test]
    fn test_all_criteria_must_match() {
        let query = SearchQuery::new()
            .with_title("Cats")
            .with_max_duration(10)
            .with_genre(Genre::Comedy);

        assert!(query.matches(&entry("Cats", 5, Genre::Comedy)));
        assert!(!query.matches(&entry("cats", 5, Genre::Comedy)));
        assert!(!query.matches(&entry("Cats", 15, Genre::Comedy)));
        assert!(!query.matches(&entry("Cats", 5, Genre::Music)));
    }
}
