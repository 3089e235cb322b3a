//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single typed
//! entry point for all shelf operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** each call to its command module
//! - **Returns structured types** (`Result<CmdResult>`), so callers can tell a
//!   missing product from a broken file from a rejected candidate
//!
//! It does no business logic (that lives in `commands/*.rs`) and no printing.
//! For the log-and-continue behavior see [`crate::manager::ProductManager`],
//! which wraps this facade.
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{NewProduct, Product, ProductPatch};
use crate::store::DataStore;
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct ShelfApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_product(&mut self, candidate: NewProduct) -> Result<CmdResult> {
        commands::add::run(&mut self.store, candidate)
    }

    pub fn get_product(&self, id: u64) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn save_products(&mut self, products: &[Product]) -> Result<CmdResult> {
        commands::save::run(&mut self.store, products)
    }

    pub fn update_product(&mut self, id: u64, patch: ProductPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_product(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
