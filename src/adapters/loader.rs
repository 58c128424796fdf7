//! Bulk loading of entries from a text file.
//!
//! Each record is four lines followed by a separator:
//!
//! ```text
//! Cats
//! https://example.com/cats
//! 5
//! Comedy
//! ===============================
//! ```
//!
//! An unknown genre label aborts the whole load. Hosts that want the
//! hard-fail behaviour (terminate the process) use [`load_or_exit`].

use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::Lines;

use thiserror::Error;
use tokio::fs;
use tracing::{debug, error, info};

use crate::domain::Genre;
use crate::library::Catalog;

/// Line that terminates every record (31 `=` characters)
pub const SEPARATOR: &str = "===============================";

/// Errors that stop a load
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: record is incomplete")]
    Truncated { line: usize },

    #[error("line {line}: invalid duration {value:?}")]
    InvalidDuration { line: usize, value: String },

    #[error("line {line}: invalid genre {label:?}")]
    UnknownGenre { line: usize, label: String },

    #[error("line {line}: expected record separator, found {found:?}")]
    MalformedSeparator { line: usize, found: String },
}

impl LoadError {
    /// Whether this error must terminate the program
    pub fn is_fatal(&self) -> bool {
        matches!(self, LoadError::UnknownGenre { .. })
    }
}

/// Outcome of a completed load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records read from the input
    pub records: usize,

    /// Records the catalog accepted
    pub added: usize,
}

/// Sequential reader over numbered input lines
struct RecordReader<'a> {
    lines: Peekable<Lines<'a>>,
    line: usize,
}

impl<'a> RecordReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().peekable(),
            line: 0,
        }
    }

    /// True once only blank lines remain
    fn at_end(&mut self) -> bool {
        let next_is_blank = match self.lines.peek() {
            Some(line) => line.trim().is_empty(),
            None => return true,
        };
        next_is_blank && self.lines.clone().all(|line| line.trim().is_empty())
    }

    fn next_line(&mut self) -> Result<&'a str, LoadError> {
        self.line += 1;
        match self.lines.next() {
            Some(line) => Ok(line),
            None => Err(LoadError::Truncated { line: self.line }),
        }
    }
}

/// Load records from in-memory text into the catalog
///
/// Records are handed to [`Catalog::add_entry`] one at a time; an entry the
/// catalog rejects is counted but does not stop the load. Records loaded
/// before an error stay in the catalog.
pub fn load_str(
    catalog: &mut Catalog,
    input: &str,
    verbose: bool,
) -> Result<LoadReport, LoadError> {
    let mut reader = RecordReader::new(input);
    let mut report = LoadReport::default();

    while !reader.at_end() {
        let title = reader.next_line()?;
        let url = reader.next_line()?;

        let raw_duration = reader.next_line()?;
        let duration: i64 = raw_duration
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidDuration {
                line: reader.line,
                value: raw_duration.to_string(),
            })?;

        let label = reader.next_line()?;
        let genre: Genre = label.parse().map_err(|_| LoadError::UnknownGenre {
            line: reader.line,
            label: label.to_string(),
        })?;

        let separator = reader.next_line()?;
        if separator.trim_end() != SEPARATOR {
            return Err(LoadError::MalformedSeparator {
                line: reader.line,
                found: separator.to_string(),
            });
        }

        if verbose {
            println!("Loading: {}, {}, {}, {}, ", title, url, duration, genre);
        }
        debug!(title, url, duration, %genre, "Loaded record");

        report.records += 1;
        if catalog.add_entry(title, url, duration, genre) {
            report.added += 1;
        }
    }

    if verbose {
        println!("Video entries loaded: {}", report.records);
    }

    Ok(report)
}

/// Load records from a file into the catalog
pub async fn load_file(
    catalog: &mut Catalog,
    path: &Path,
    verbose: bool,
) -> Result<LoadReport, LoadError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let report = load_str(catalog, &content, verbose)?;
    info!(
        path = %path.display(),
        records = report.records,
        added = report.added,
        "Loaded catalog data"
    );

    Ok(report)
}

/// Load records from a file, terminating the process on an unknown genre
///
/// A data file with an unrecognised genre is treated as unusable rather
/// than partially importable. Other errors are returned to the caller.
pub async fn load_or_exit(
    catalog: &mut Catalog,
    path: &Path,
    verbose: bool,
) -> Result<LoadReport, LoadError> {
    match load_file(catalog, path, verbose).await {
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            eprintln!("Invalid genre found while loading data");
            std::process::exit(1);
        }
        result => result,
    }
}
