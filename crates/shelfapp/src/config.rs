//! # Configuration
//!
//! Shelf configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `SHELF__DATA_FILE`, `SHELF__INDENT`.
//! 2. **Working directory config**: `./shelf.toml`.
//! 3. **Global config**: `shelf.toml` in the OS-appropriate config directory
//!    (via the `directories` crate).
//! 4. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! The CLI's `--file` flag beats all of the above for the backing file.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `products.json` | Backing file; relative paths resolve against the working directory |
//! | `indent` | `2` | Spaces per indentation level when writing the backing file |

use confique::Config;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "products.json";

/// Configuration for shelf, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Path of the JSON file holding the catalog.
    #[config(default = "products.json")]
    pub data_file: String,

    /// Spaces per indentation level in the backing file.
    #[config(default = 2)]
    pub indent: usize,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            indent: crate::store::fs::DEFAULT_INDENT,
        }
    }
}

impl ShelfConfig {
    /// The configured data file, or the default when the setting is blank.
    pub fn data_file(&self) -> &str {
        let trimmed = self.data_file.trim();
        if trimmed.is_empty() {
            DEFAULT_DATA_FILE
        } else {
            trimmed
        }
    }
}
