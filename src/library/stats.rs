//! Summary counts over the catalog.

use crate::domain::Genre;

/// Entry and playlist totals, with a per-genre breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub entries: usize,
    pub collections: usize,

    /// One count per genre, in canonical genre order, zeros included
    pub genres: Vec<GenreCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: Genre,
    pub count: usize,
}

impl CatalogStats {
    /// Count for a single genre
    pub fn genre_count(&self, genre: Genre) -> usize {
        self.genres
            .iter()
            .find(|g| g.genre == genre)
            .map(|g| g.count)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "***** Statistics *****")?;
        writeln!(f, "Number of video entries: {}", self.entries)?;
        writeln!(f, "Number of playlists: {}", self.collections)?;
        for g in &self.genres {
            writeln!(f, "Genre \"{}\" count {}", g.genre, g.count)?;
        }
        Ok(())
    }
}
