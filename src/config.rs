//! Configuration for vidcat.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VIDCAT_HOME, VIDCAT_DATA, VIDCAT_OUTPUT)
//! 2. Config file (.vidcat/config.yaml)
//! 3. Defaults (~/.vidcat, no data file, pages written to the current directory)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vidcat/config.yaml
//! - Falls back to config.yaml inside the home directory
//! - Paths in a project config file are relative to the project root
//!   (the parent of .vidcat/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_PAGE_TITLE: &str = "Manager";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub page: Option<PageConfig>,
    #[serde(default)]
    pub load: Option<LoadConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Default bulk-load data file
    pub data: Option<String>,
    /// Directory for generated pages
    pub output: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadConfig {
    pub verbose: Option<bool>,
}

/// Values taken from the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub home: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().map(PathBuf::from);
        Self {
            home: var("VIDCAT_HOME"),
            data: var("VIDCAT_DATA"),
            output: var("VIDCAT_OUTPUT"),
        }
    }
}

/// Resolved configuration with absolute paths where known
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// vidcat home directory (global config)
    pub home: PathBuf,
    /// Data file loaded at start-up, if any
    pub data_file: Option<PathBuf>,
    /// Directory for generated pages
    pub output_dir: PathBuf,
    /// `<title>` of generated pages
    pub page_title: String,
    /// Print per-record loader feedback
    pub verbose: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Default output path for a playlist page
    pub fn page_path(&self, playlist_name: &str) -> PathBuf {
        let stem: String = playlist_name
            .trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.output_dir.join(format!("{}.html", stem))
    }
}

/// Find config file by searching current directory and parents
fn find_config_file(home: &Path) -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".vidcat").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let global = home.join("config.yaml");
    global.exists().then_some(global)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Combine defaults, an optional config file, and environment overrides
fn resolve_config(
    default_home: PathBuf,
    config: Option<(PathBuf, ConfigFile)>,
    env: EnvOverrides,
) -> ResolvedConfig {
    let home = env.home.unwrap_or(default_home);

    let Some((config_path, file)) = config else {
        return ResolvedConfig {
            home,
            data_file: env.data,
            output_dir: env.output.unwrap_or_else(|| PathBuf::from(".")),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            verbose: false,
            config_file: None,
        };
    };

    // Base directory is the parent of .vidcat/ (i.e., grandparent of config.yaml)
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    let data_file = env
        .data
        .or_else(|| file.paths.data.as_deref().map(|p| resolve_path(&base_dir, p)));

    let output_dir = env
        .output
        .or_else(|| file.paths.output.as_deref().map(|p| resolve_path(&base_dir, p)))
        .unwrap_or_else(|| PathBuf::from("."));

    let page_title = file
        .page
        .and_then(|p| p.title)
        .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());

    let verbose = file.load.and_then(|l| l.verbose).unwrap_or(false);

    ResolvedConfig {
        home,
        data_file,
        output_dir,
        page_title,
        verbose,
        config_file: Some(config_path),
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let env = EnvOverrides::from_env();

    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".vidcat");
    let home = env.home.clone().unwrap_or_else(|| default_home.clone());

    let config = match find_config_file(&home) {
        Some(path) => {
            let file = load_config_file(&path)?;
            Some((path, file))
        }
        None => None,
    };

    Ok(resolve_config(default_home, config, env))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn parse(yaml: &str) -> ConfigFile {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(
            PathBuf::from("/home/user/.vidcat"),
            None,
            EnvOverrides::default(),
        );

        assert_eq!(config.home, PathBuf::from("/home/user/.vidcat"));
        assert!(config.data_file.is_none());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.page_title, "Manager");
        assert!(!config.verbose);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let vidcat_dir = temp.path().join(".vidcat");
        std::fs::create_dir_all(&vidcat_dir).unwrap();

        let config_path = vidcat_dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1.0"
paths:
  data: data/videos.txt
  output: site
page:
  title: My Videos
load:
  verbose: true
"#
        )
        .unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.paths.data, Some("data/videos.txt".to_string()));
        assert_eq!(config.paths.output, Some("site".to_string()));
        assert_eq!(config.page.unwrap().title, Some("My Videos".to_string()));
        assert_eq!(config.load.unwrap().verbose, Some(true));
    }

    #[test]
    fn test_paths_resolve_against_project_root() {
        let file = parse(
            r#"
version: "1.0"
paths:
  data: videos.txt
  output: /srv/pages
"#,
        );

        let config = resolve_config(
            PathBuf::from("/home/user/.vidcat"),
            Some((PathBuf::from("/work/project/.vidcat/config.yaml"), file)),
            EnvOverrides::default(),
        );

        assert_eq!(
            config.data_file,
            Some(PathBuf::from("/work/project/videos.txt"))
        );
        assert_eq!(config.output_dir, PathBuf::from("/srv/pages"));
        assert_eq!(config.page_title, "Manager");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = parse(
            r#"
version: "1.0"
paths:
  data: videos.txt
"#,
        );

        let config = resolve_config(
            PathBuf::from("/home/user/.vidcat"),
            Some((PathBuf::from("/work/project/.vidcat/config.yaml"), file)),
            EnvOverrides {
                home: Some(PathBuf::from("/opt/vidcat")),
                data: Some(PathBuf::from("/tmp/other.txt")),
                output: Some(PathBuf::from("/tmp/out")),
            },
        );

        assert_eq!(config.home, PathBuf::from("/opt/vidcat"));
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/other.txt")));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_page_path() {
        let config = resolve_config(
            PathBuf::from("/home/user/.vidcat"),
            None,
            EnvOverrides {
                output: Some(PathBuf::from("/srv/pages")),
                ..Default::default()
            },
        );

        assert_eq!(
            config.page_path("Road Trip"),
            PathBuf::from("/srv/pages/Road_Trip.html")
        );
        assert_eq!(
            config.page_path("a/b"),
            PathBuf::from("/srv/pages/a_b.html")
        );
    }
}
