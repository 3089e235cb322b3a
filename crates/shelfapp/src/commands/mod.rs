//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each operation lives
//! in its own submodule as a plain function over a [`DataStore`].
//!
//! ## Shape of Every Mutating Command
//!
//! ```text
//! load_products()  →  validate / find / merge in memory  →  save_products()
//! ```
//!
//! A command that rejects its input returns before the save, so a rejected
//! operation never touches the backing file.
//!
//! ## What Commands Do NOT Do
//!
//! - **Swallow errors**: every failure is returned as a [`ShelfError`] variant.
//!   Turning failures into logged no-ops is [`crate::manager`]'s job.
//! - **Print**: no stdout/stderr. Success events go through `tracing`.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], which carries:
//! - `affected_products`: records created, updated or removed
//! - `listed_products`: records to display
//! - `messages`: human-readable outcome messages with levels
//!
//! ## Command Modules
//!
//! - [`add`]: Validate and insert a new product
//! - [`get`]: Look up a product by id
//! - [`list`]: Load the full collection
//! - [`save`]: Replace the full collection
//! - [`update`]: Merge a patch onto an existing product
//! - [`delete`]: Remove a product by id
//!
//! [`DataStore`]: crate::store::DataStore
//! [`ShelfError`]: crate::error::ShelfError

use crate::error::{Result, ShelfError};
use crate::model::Product;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod save;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }
}

/// The id the next inserted product receives: one past the current maximum,
/// or 1 for an empty collection. Fails once `u64::MAX` has been handed out.
pub fn next_id(products: &[Product]) -> Result<u64> {
    match products.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ShelfError::Store("id space exhausted".to_string())),
    }
}
