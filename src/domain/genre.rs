//! Video genres.

use serde::Serialize;

use super::error::ValidationError;

/// Category of a video
///
/// The variant order is the canonical order used by statistics output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    FilmAnimation,
    Comedy,
    Educational,
    Documentary,
    Music,
}

impl Genre {
    /// All genres in canonical order
    pub const ALL: [Genre; 5] = [
        Genre::FilmAnimation,
        Genre::Comedy,
        Genre::Educational,
        Genre::Documentary,
        Genre::Music,
    ];

    /// Canonical display label
    pub fn label(self) -> &'static str {
        match self {
            Genre::FilmAnimation => "FilmAnimation",
            Genre::Comedy => "Comedy",
            Genre::Educational => "Educational",
            Genre::Documentary => "Documentary",
            Genre::Music => "Music",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Genre {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the canonical labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| ValidationError::UnknownGenre {
                label: s.to_string(),
            })
    }
}
