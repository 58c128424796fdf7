//! Command-line interface for vidcat.
//!
//! Every invocation starts from an empty catalog, bulk-loads the data file
//! (from `--data` or the config), then runs one command against it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::adapters::{loader, page, LoadReport, PageOptions};
use crate::config::{self, ResolvedConfig};
use crate::domain::{Entry, Genre};
use crate::library::{Catalog, SearchQuery};

/// vidcat - Video catalog with playlists and static pages
#[derive(Parser, Debug)]
#[command(name = "vidcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data file to load before running the command
    #[arg(short, long, global = true, env = "VIDCAT_DATA")]
    pub data: Option<PathBuf>,

    /// Print per-record loading feedback
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the data file and report how many videos were read
    Load,

    /// Show catalog statistics
    Stats,

    /// List all videos
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single video by exact title
    Show {
        /// Video title
        title: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search videos by title, maximum duration, and genre
    Search {
        /// Name of the result playlist
        #[arg(short, long, default_value = "Search results")]
        name: String,

        /// Exact title
        #[arg(short, long)]
        title: Option<String>,

        /// Maximum duration in minutes (negative means no limit)
        #[arg(short, long, allow_negative_numbers = true)]
        max_duration: Option<i64>,

        /// Genre
        #[arg(short, long, value_enum)]
        genre: Option<GenreArg>,
    },

    /// Build a playlist and write it as an HTML page
    Page {
        /// Playlist name
        #[arg(short, long)]
        playlist: String,

        /// Video titles to add, in order
        #[arg(short = 't', long = "title", required = true)]
        titles: Vec<String>,

        /// Output file (defaults to <output dir>/<playlist>.html)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Genre for CLI (maps to Genre)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenreArg {
    FilmAnimation,
    Comedy,
    Educational,
    Documentary,
    Music,
}

impl From<GenreArg> for Genre {
    fn from(g: GenreArg) -> Self {
        match g {
            GenreArg::FilmAnimation => Genre::FilmAnimation,
            GenreArg::Comedy => Genre::Comedy,
            GenreArg::Educational => Genre::Educational,
            GenreArg::Documentary => Genre::Documentary,
            GenreArg::Music => Genre::Music,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let verbose = self.verbose || cfg.verbose;
        let data_file = self.data.or_else(|| cfg.data_file.clone());

        let mut catalog = Catalog::new();
        let report = match &data_file {
            Some(path) => Some(
                loader::load_or_exit(&mut catalog, path, verbose)
                    .await
                    .with_context(|| format!("Failed to load data file: {}", path.display()))?,
            ),
            None => None,
        };

        match self.command {
            Commands::Load => show_load(data_file, report),
            Commands::Stats => {
                print!("{}", catalog.statistics());
                Ok(())
            }
            Commands::List { json } => list_videos(&catalog, json),
            Commands::Show { title, json } => show_video(&catalog, &title, json),
            Commands::Search {
                name,
                title,
                max_duration,
                genre,
            } => search_videos(&catalog, &name, title, max_duration, genre),
            Commands::Page {
                playlist,
                titles,
                out,
            } => write_page(&mut catalog, cfg, &playlist, &titles, out, verbose).await,
            Commands::Config => show_config(cfg),
        }
    }
}

/// Summarize a bulk load
fn show_load(data_file: Option<PathBuf>, report: Option<LoadReport>) -> Result<()> {
    let (Some(path), Some(report)) = (data_file, report) else {
        anyhow::bail!("No data file provided. Use --data <file> or set paths.data in the config");
    };

    println!(
        "Loaded {} of {} records from {}",
        report.added,
        report.records,
        path.display()
    );

    Ok(())
}

/// List all videos in storage order
fn list_videos(catalog: &Catalog, json: bool) -> Result<()> {
    let entries = catalog.all_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Catalog is empty. Use --data <file> to load videos.");
        return Ok(());
    }

    println!("{:<40} {:>8} {:<14} {}", "TITLE", "MINUTES", "GENRE", "URL");
    println!("{}", "-".repeat(90));

    for entry in &entries {
        println!(
            "{:<40} {:>8} {:<14} {}",
            truncate(entry.title(), 40),
            entry.duration_minutes(),
            entry.genre().to_string(),
            entry.url()
        );
    }

    println!("\nTotal: {} videos", entries.len());

    Ok(())
}

/// Show details of one video
fn show_video(catalog: &Catalog, title: &str, json: bool) -> Result<()> {
    let Some(entry) = catalog.find_entry(title)? else {
        println!("No video titled \"{}\"", title);
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        print_entry(&entry);
    }

    Ok(())
}

fn print_entry(entry: &Entry) {
    print!("{}", entry);
    if entry.comments().is_empty() {
        println!("Comments: (none)");
    } else {
        println!("Comments:");
        for comment in entry.comments() {
            println!("  - {}", comment);
        }
    }
}

/// Run a search and print the matching titles
fn search_videos(
    catalog: &Catalog,
    name: &str,
    title: Option<String>,
    max_duration: Option<i64>,
    genre: Option<GenreArg>,
) -> Result<()> {
    let mut query = SearchQuery::new();
    if let Some(title) = title {
        query = query.with_title(title);
    }
    if let Some(minutes) = max_duration {
        query = query.with_max_duration(minutes);
    }
    if let Some(genre) = genre {
        query = query.with_genre(genre.into());
    }

    let results = catalog.search(name, &query)?;

    if results.is_empty() {
        println!("No matching videos");
        return Ok(());
    }

    println!("Playlist: {}", results.name());
    for title in results.titles() {
        println!("  {}", title);
    }

    Ok(())
}

/// Create a playlist from titles and write its page
async fn write_page(
    catalog: &mut Catalog,
    cfg: &ResolvedConfig,
    playlist: &str,
    titles: &[String],
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if !catalog.add_collection(playlist)? {
        anyhow::bail!("Playlist '{}' already exists", playlist);
    }

    for title in titles {
        if !catalog.add_entry_to_collection(title, playlist) {
            warn!(title = %title, "Video not found; leaving it out of the playlist");
        }
    }

    let path = out.unwrap_or_else(|| cfg.page_path(playlist));
    let options = PageOptions {
        title: cfg.page_title.clone(),
        verbose,
    };
    page::write_playlist_page(catalog, &path, playlist, &options).await?;

    if !verbose {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Print the resolved configuration
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("vidcat configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:      {}", cfg.home.display());
    println!(
        "  Data file: {}",
        cfg.data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("  Output:    {}", cfg.output_dir.display());
    println!();
    println!("Pages:");
    println!("  Title:     {}", cfg.page_title);
    println!();
    println!("Loading:");
    println!("  Verbose:   {}", cfg.verbose);

    Ok(())
}

/// Shorten text to at most `max` characters
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
