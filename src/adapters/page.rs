//! Static HTML pages for playlists.
//!
//! Each member is rendered as a bold title over an embedded frame pointing
//! at the video's url, in playlist order.

use std::path::{Path, PathBuf};

use maud::{html, Markup, PreEscaped};
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::domain::ValidationError;
use crate::library::Catalog;

/// Errors from page generation
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("playlist member {title:?} has no matching video")]
    MissingEntry { title: String },

    #[error("Failed to write page {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Page rendering settings
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Contents of the `<title>` element
    pub title: String,

    /// Print a line once the page is written
    pub verbose: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Manager".to_string(),
            verbose: false,
        }
    }
}

/// Render the named playlist as a complete HTML page
///
/// All interpolated text is escaped.
pub fn render_playlist(
    catalog: &Catalog,
    playlist_name: &str,
    page_title: &str,
) -> Result<String, PageError> {
    let playlist = catalog
        .get_collection(playlist_name)?
        .ok_or_else(|| ValidationError::UnknownCollection {
            name: playlist_name.to_string(),
        })?;

    let mut members = Vec::with_capacity(playlist.len());
    for title in playlist.titles() {
        let entry = catalog
            .find_entry(title)?
            .ok_or_else(|| PageError::MissingEntry {
                title: title.clone(),
            })?;
        members.push(entry);
    }

    let content = html! {
        h2 { "Playlist: " (playlist.name()) }
        "\n"
        @for entry in &members {
            strong { (entry.title()) }
            br;
            iframe width="100" height="100" src=(entry.url()) {}
            br;
            br;
        }
    };

    Ok(page_shell(page_title, content).into_string())
}

/// Render the named playlist and write it to `path` as UTF-8
pub async fn write_playlist_page(
    catalog: &Catalog,
    path: &Path,
    playlist_name: &str,
    options: &PageOptions,
) -> Result<(), PageError> {
    let page = render_playlist(catalog, playlist_name, &options.title)?;

    let io_err = |source: std::io::Error| PageError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    fs::write(path, page).await.map_err(io_err)?;

    info!(path = %path.display(), playlist = playlist_name, "Wrote playlist page");
    if options.verbose {
        println!("{} has been created", path.display());
    }

    Ok(())
}

fn page_shell(page_title: &str, content: Markup) -> Markup {
    html! {
        (PreEscaped("<!doctype html>\n"))
        html lang="en" {
            "\n"
            head {
                "\n"
                title { (page_title) }
                "\n"
                meta charset="utf-8";
                "\n"
            }
            "\n"
            body {
                "\n"
                (content)
                "\n"
            }
            "\n"
        }
        "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shell() {
        let page = page_shell("Manager", html! { p { "hi" } });
        assert_eq!(
            page.into_string(),
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<title>Manager</title>\n\
             <meta charset=\"utf-8\">\n</head>\n<body>\n<p>hi</p>\n</body>\n</html>\n"
        );
    }

    #[test]
    fn test_page_shell_escapes_title() {
        let page = page_shell("Tom & \"Jerry\" <3", html! {});
        assert!(page
            .into_string()
            .contains("<title>Tom &amp; &quot;Jerry&quot; &lt;3</title>"));
    }
}
