//! # Storage Layer
//!
//! This module defines the storage abstraction for shelf. The [`DataStore`] trait
//! exposes exactly two primitives over the whole collection:
//!
//! - **load**: read every record, in stored order.
//! - **save**: replace every record with the given sequence.
//!
//! There is no per-record I/O, no index and no cache. Every operation in
//! [`crate::commands`] is written as *load full → mutate in memory → save full*.
//!
//! ## Missing vs Broken
//!
//! A missing backing file is a valid, empty collection. A file that exists but
//! cannot be read or parsed is an error (`Io` / `Serialization`). Whether that
//! error is surfaced or swallowed is decided above this layer.
//!
//! ## Concurrency
//!
//! `save_products` takes `&mut self`, and so does every mutating command. A
//! single store handle therefore serializes its own load-mutate-save cycles.
//! Two handles on the same file (or two processes) are NOT coordinated: both
//! may load the same snapshot and the last save wins. Writes are atomic
//! (temp file + rename), so a crash never leaves a half-written file.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON file on disk, pretty-printed.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## File Layout
//!
//! ```text
//! products.json
//! [
//!   {
//!     "id": 1,
//!     "title": "...",
//!     "description": "...",
//!     "price": 10.0,
//!     "thumbnail": "...",
//!     "code": "C1",
//!     "stock": 5
//!   }
//! ]
//! ```

use crate::error::Result;
use crate::model::Product;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-collection product storage.
pub trait DataStore {
    /// Load the full collection. A missing backing file yields an empty one.
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Replace the full collection.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;

    /// Where the collection lives (a virtual path for non-file stores).
    fn location(&self) -> PathBuf;
}
