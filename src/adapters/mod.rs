//! Adapters between the catalog and the file system.
//!
//! - `loader`: Bulk-loads entries from the line-record text format
//! - `page`: Renders a playlist as a static HTML page

pub mod loader;
pub mod page;

pub use loader::{load_file, load_or_exit, load_str, LoadError, LoadReport, SEPARATOR};
pub use page::{render_playlist, write_playlist_page, PageError, PageOptions};
