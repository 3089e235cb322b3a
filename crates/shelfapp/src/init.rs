//! # Context Initialization
//!
//! [`initialize`] turns "where am I and what did the user ask for" into a ready
//! [`ShelfContext`]: resolved configuration, resolved backing file and an API
//! over a [`FileStore`] pointing at it.
//!
//! ## Backing File Resolution
//!
//! 1. `file_override` (the CLI `--file` flag), if given.
//! 2. Otherwise the configured `data_file` (see [`crate::config`]).
//!
//! Relative paths resolve against `cwd`. The file does not have to exist: a
//! missing file is an empty catalog.
//!
//! ## Environment Variables
//!
//! * `SHELF_GLOBAL_DIR` - If set, overrides the global config directory.
//!   Primarily used by tests to isolate global state.

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "shelf.toml";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub data_file: PathBuf,
}

/// The per-user config directory, if one can be determined.
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var("SHELF_GLOBAL_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().to_path_buf())
        })
}

/// Loads the layered configuration: global dir first, then `cwd` on top.
pub fn load_config(cwd: &Path) -> Result<ShelfConfig> {
    let mut search_paths = Vec::new();
    if let Some(global) = global_config_dir() {
        search_paths.push(SearchPath::Path(global));
    }
    search_paths.push(SearchPath::Path(cwd.to_path_buf()));

    Clapfig::builder()
        .app_name("shelf")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .map_err(|e| ShelfError::Config(e.to_string()))
}

/// Resolves the backing file from an explicit override or the configuration.
pub fn resolve_data_file(cwd: &Path, config: &ShelfConfig, file_override: Option<PathBuf>) -> PathBuf {
    let path = file_override.unwrap_or_else(|| PathBuf::from(config.data_file()));
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Initialize the shelf context.
///
/// A configuration that fails to load is logged and replaced by the defaults.
///
/// # Arguments
///
/// * `cwd` - Directory used for config lookup and relative path resolution
/// * `file_override` - Optional explicit backing file, bypassing `data_file`
pub fn initialize(cwd: &Path, file_override: Option<PathBuf>) -> ShelfContext {
    let config = load_config(cwd).unwrap_or_else(|e| {
        warn!(error = %e, "could not load configuration, using defaults");
        ShelfConfig::default()
    });
    let data_file = resolve_data_file(cwd, &config, file_override);
    debug!(data_file = %data_file.display(), indent = config.indent, "shelf initialized");

    let store = FileStore::new(data_file.clone()).with_indent(config.indent);
    ShelfContext {
        api: ShelfApi::new(store),
        config,
        data_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_config() {
        let config = ShelfConfig {
            data_file: "configured.json".into(),
            ..Default::default()
        };
        let path = resolve_data_file(
            Path::new("/work"),
            &config,
            Some(PathBuf::from("explicit.json")),
        );
        assert_eq!(path, PathBuf::from("/work/explicit.json"));
    }

    #[test]
    fn config_used_without_override() {
        let config = ShelfConfig {
            data_file: "data/catalog.json".into(),
            ..Default::default()
        };
        let path = resolve_data_file(Path::new("/work"), &config, None);
        assert_eq!(path, PathBuf::from("/work/data/catalog.json"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let path = resolve_data_file(
            Path::new("/work"),
            &ShelfConfig::default(),
            Some(PathBuf::from("/srv/products.json")),
        );
        assert_eq!(path, PathBuf::from("/srv/products.json"));
    }

    #[test]
    fn malformed_config_file_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "indent = \"wide\"\n").unwrap();

        assert!(matches!(load_config(dir.path()), Err(ShelfError::Config(_))));
    }

    #[test]
    fn default_resolves_to_products_json_in_cwd() {
        let path = resolve_data_file(Path::new("/work"), &ShelfConfig::default(), None);
        assert_eq!(path, PathBuf::from("/work/products.json"));
    }
}
